//! Health command handler.

use super::{connect_llm, open_store, print_json};
use crate::api::health::check_health;
use clap::Args;
use docqa_core::{config::AppConfig, AppError, AppResult};

/// Check the database and LLM provider
#[derive(Args, Debug)]
pub struct HealthCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl HealthCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let store = open_store(config)?;
        let llm = connect_llm(config)?;
        let report = check_health(store.as_ref(), llm.as_ref()).await;

        if self.json {
            print_json(&report)?;
        } else {
            println!("backend:  {}", report.backend);
            println!("database: {}", report.database);
            println!("llm:      {} ({})", report.llm, llm.provider_name());
        }

        if !report.is_healthy() {
            return Err(AppError::StoreUnavailable(
                "Database health check failed".to_string(),
            ));
        }

        Ok(())
    }
}
