//! Command handlers for the docqa CLI.

pub mod ask;
pub mod docs;
pub mod health;
pub mod serve;

pub use ask::AskCommand;
pub use docs::DocsCommand;
pub use health::HealthCommand;
pub use serve::ServeCommand;

use docqa_core::{config::AppConfig, AppResult};
use docqa_knowledge::{DocumentStore, SqliteStore};
use docqa_llm::{create_client, LlmClient};
use std::sync::Arc;
use std::time::Duration;

/// Open the configured document database.
pub fn open_store(config: &AppConfig) -> AppResult<Arc<dyn DocumentStore>> {
    let store = SqliteStore::open(&config.database_path())?;
    Ok(Arc::new(store))
}

/// Construct the configured LLM client.
pub fn connect_llm(config: &AppConfig) -> AppResult<Arc<dyn LlmClient>> {
    create_client(
        &config.provider,
        config.endpoint.as_deref(),
        Duration::from_secs(config.timeout_secs),
    )
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
