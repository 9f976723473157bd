//! Health check endpoint

use super::ApiState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use docqa_knowledge::DocumentStore;
use docqa_llm::LlmClient;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub backend: &'static str,
    pub database: &'static str,
    pub llm: &'static str,
}

impl HealthReport {
    /// The service can answer only while the database is reachable.
    pub fn is_healthy(&self) -> bool {
        self.database == "connected"
    }
}

/// Probe the database and the LLM provider concurrently.
pub async fn check_health(store: &dyn DocumentStore, llm: &dyn LlmClient) -> HealthReport {
    let (db, provider) = tokio::join!(store.ping(), llm.health_check());

    if let Err(e) = &db {
        tracing::warn!("Database health check failed: {}", e);
    }
    if let Err(e) = &provider {
        tracing::warn!("LLM health check failed: {}", e);
    }

    HealthReport {
        backend: "ok",
        database: if db.is_ok() { "connected" } else { "error" },
        llm: if provider.is_ok() { "reachable" } else { "unreachable" },
    }
}

/// GET /health
pub async fn get_health(State(state): State<Arc<ApiState>>) -> (StatusCode, Json<HealthReport>) {
    let report = check_health(state.store.as_ref(), state.llm.as_ref()).await;

    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(report))
}
