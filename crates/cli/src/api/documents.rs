//! Document upload and listing endpoints

use super::error::{ApiContext, ApiError};
use super::ApiState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use docqa_core::DocumentSummary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const LIST_FAILED: &str = "Failed to fetch documents";
const UPLOAD_FAILED: &str = "Failed to upload document";

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub id: String,
}

/// GET /documents: stored documents, newest first, without content
pub async fn list_documents(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<DocumentSummary>>, ApiError> {
    let documents = state.store.list_documents().await.api_context(LIST_FAILED)?;
    Ok(Json(documents))
}

/// POST /documents: store a new document
pub async fn upload_document(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::from_rejection(UPLOAD_FAILED, e))?;

    let document = state
        .store
        .insert_document(&request.name, &request.content)
        .await
        .api_context(UPLOAD_FAILED)?;

    Ok(Json(UploadResponse {
        message: "Document uploaded successfully",
        id: document.id,
    }))
}
