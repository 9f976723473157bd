//! In-process document store.

use crate::store::{validate_new_document, DocumentStore};
use docqa_core::{AppError, AppResult, Document, DocumentSummary};
use std::sync::RwLock;

/// Document store held in memory. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AppError {
    AppError::StoreUnavailable("In-memory store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(&self) -> AppResult<Vec<DocumentSummary>> {
        let documents = self.documents.read().map_err(|_| poisoned())?;
        Ok(documents.iter().rev().map(Document::summary).collect())
    }

    async fn insert_document(&self, name: &str, content: &str) -> AppResult<Document> {
        validate_new_document(name, content)?;

        let document = Document::new(uuid::Uuid::new_v4().to_string(), name.trim(), content);
        self.documents
            .write()
            .map_err(|_| poisoned())?
            .push(document.clone());

        tracing::debug!("Stored document '{}' in memory", document.name);
        Ok(document)
    }

    async fn fetch_all_documents(&self) -> AppResult<Vec<Document>> {
        Ok(self.documents.read().map_err(|_| poisoned())?.clone())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
