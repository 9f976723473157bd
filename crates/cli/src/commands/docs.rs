//! Docs command handler.
//!
//! Adds documents to the store and lists what is stored.

use super::{open_store, print_json};
use clap::{Args, Subcommand};
use docqa_core::{config::AppConfig, AppResult};
use std::path::PathBuf;

/// Manage stored documents
#[derive(Args, Debug)]
pub struct DocsCommand {
    #[command(subcommand)]
    pub action: DocsAction,
}

#[derive(Subcommand, Debug)]
pub enum DocsAction {
    /// Store a new document
    Add(DocsAddCommand),
    /// List stored documents, newest first
    List(DocsListCommand),
}

impl DocsCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.action {
            DocsAction::Add(cmd) => cmd.execute(config).await,
            DocsAction::List(cmd) => cmd.execute(config).await,
        }
    }
}

/// Store a new document
#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("body").required(true).args(["file", "content"])))]
pub struct DocsAddCommand {
    /// Document name, reported as the answer source
    pub name: String,

    /// Read the document content from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Document content given inline
    #[arg(long)]
    pub content: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DocsAddCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Adding document '{}'", self.name);

        let content = match (&self.file, &self.content) {
            (Some(path), _) => {
                tracing::debug!("Reading document content from {:?}", path);
                std::fs::read_to_string(path)?
            }
            (None, Some(content)) => content.clone(),
            (None, None) => String::new(),
        };

        let store = open_store(config)?;
        let document = store.insert_document(&self.name, &content).await?;

        if self.json {
            print_json(&serde_json::json!({
                "message": "Document uploaded successfully",
                "id": document.id,
            }))?;
        } else {
            println!("Document uploaded successfully ({})", document.id);
        }

        Ok(())
    }
}

/// List stored documents
#[derive(Args, Debug)]
pub struct DocsListCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DocsListCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let store = open_store(config)?;
        let documents = store.list_documents().await?;

        tracing::debug!("Listing {} documents", documents.len());

        if self.json {
            return print_json(&documents);
        }

        if documents.is_empty() {
            println!("No documents stored.");
            return Ok(());
        }

        for doc in &documents {
            println!(
                "{}  {}  {}",
                doc.id,
                doc.created_at.format("%Y-%m-%d %H:%M:%S"),
                doc.name
            );
        }

        Ok(())
    }
}
