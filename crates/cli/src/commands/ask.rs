//! Ask command handler.
//!
//! Answers a question from the stored documents.

use super::{connect_llm, open_store, print_json};
use clap::Args;
use docqa_core::{config::AppConfig, AppResult, SelectionPolicy};
use docqa_knowledge::{AnswerOptions, AnswerService};
use std::str::FromStr;

/// Ask a question about the stored documents
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: String,

    /// Evidence selection policy (best-match, all-relevant)
    #[arg(long, value_parser = SelectionPolicy::from_str)]
    pub policy: Option<SelectionPolicy>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let mut options = AnswerOptions::from_config(config);
        if let Some(policy) = self.policy {
            options = options.with_policy(policy);
        }

        let service = AnswerService::new(open_store(config)?, connect_llm(config)?, options);
        let result = service.answer_question(&self.question).await?;

        tracing::debug!("Answer outcome: {:?}", result.outcome());

        if self.json {
            return print_json(&result);
        }

        println!("{}", result.answer());
        println!();
        println!("Source: {}", result.source());
        println!("Snippet: {}", result.snippet());

        Ok(())
    }
}
