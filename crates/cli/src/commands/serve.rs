//! Serve command handler.
//!
//! Runs the HTTP API until interrupted.

use super::{connect_llm, open_store};
use crate::api::{build_router, ApiState};
use clap::Args;
use docqa_core::{config::AppConfig, AppResult};
use docqa_knowledge::{AnswerOptions, AnswerService};
use std::sync::Arc;

/// Serve the HTTP API
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// Address to listen on (default from config: 127.0.0.1:3000)
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let bind = self.bind.as_deref().unwrap_or(&config.bind);

        let store = open_store(config)?;
        let llm = connect_llm(config)?;
        let service = AnswerService::new(
            Arc::clone(&store),
            Arc::clone(&llm),
            AnswerOptions::from_config(config),
        );
        let state = Arc::new(ApiState::new(store, llm, service));

        let listener = tokio::net::TcpListener::bind(bind).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, build_router(state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
