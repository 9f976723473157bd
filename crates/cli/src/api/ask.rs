//! Question answering endpoint

use super::error::{ApiContext, ApiError};
use super::ApiState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use docqa_knowledge::AnswerResult;
use serde::Deserialize;
use std::sync::Arc;

const ASK_FAILED: &str = "Failed to answer question";

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

/// POST /ask: answer a question from the stored documents
pub async fn ask_question(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AnswerResult>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::from_rejection(ASK_FAILED, e))?;

    let result = state
        .service
        .answer_question(&request.question)
        .await
        .api_context(ASK_FAILED)?;

    Ok(Json(result))
}
