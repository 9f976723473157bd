//! Test doubles for the store and LLM collaborators.

use crate::store::DocumentStore;
use docqa_core::{AppError, AppResult, Document, DocumentSummary};
use docqa_llm::{LlmClient, LlmRequest, LlmResponse};
use std::sync::Mutex;

/// LLM that records every request and answers with a canned reply.
pub struct RecordingLlm {
    reply: String,
    requests: Mutex<Vec<LlmRequest>>,
}

impl RecordingLlm {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.prompt).collect()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlm {
    fn provider_name(&self) -> &str {
        "recording"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(LlmResponse::new(self.reply.clone(), request.model.clone()))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

/// LLM whose every call fails with the given error.
pub struct FailingLlm {
    error: fn() -> AppError,
}

impl FailingLlm {
    pub fn upstream() -> Self {
        Self {
            error: || AppError::Upstream("connection refused".to_string()),
        }
    }

    pub fn other() -> Self {
        Self {
            error: || AppError::Other("unexpected payload".to_string()),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for FailingLlm {
    fn provider_name(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _request: &LlmRequest) -> AppResult<LlmResponse> {
        Err((self.error)())
    }

    async fn health_check(&self) -> AppResult<()> {
        Err((self.error)())
    }
}

/// Store that is always unreachable.
pub struct FailingStore;

#[async_trait::async_trait]
impl DocumentStore for FailingStore {
    async fn list_documents(&self) -> AppResult<Vec<DocumentSummary>> {
        Err(AppError::StoreUnavailable("database is down".to_string()))
    }

    async fn insert_document(&self, _name: &str, _content: &str) -> AppResult<Document> {
        Err(AppError::StoreUnavailable("database is down".to_string()))
    }

    async fn fetch_all_documents(&self) -> AppResult<Vec<Document>> {
        Err(AppError::StoreUnavailable("database is down".to_string()))
    }

    async fn ping(&self) -> AppResult<()> {
        Err(AppError::StoreUnavailable("database is down".to_string()))
    }
}
