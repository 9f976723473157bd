//! Document persistence.
//!
//! The answer service reads documents through the [`DocumentStore`] trait so
//! the backing store can be swapped (SQLite on disk, in-memory for tests).

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use docqa_core::{AppError, AppResult, Document, DocumentSummary};

/// Storage collaborator for documents.
///
/// Implementations report backend failures as `AppError::StoreUnavailable`.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Id, name and timestamp of every document, newest first.
    async fn list_documents(&self) -> AppResult<Vec<DocumentSummary>>;

    /// Store a new document.
    ///
    /// Fails with `AppError::InvalidInput` if name or content is blank.
    async fn insert_document(&self, name: &str, content: &str) -> AppResult<Document>;

    /// Every document with full content, in insertion order.
    async fn fetch_all_documents(&self) -> AppResult<Vec<Document>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> AppResult<()>;
}

/// Reject uploads without a name or content.
pub fn validate_new_document(name: &str, content: &str) -> AppResult<()> {
    if name.trim().is_empty() || content.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Name and content required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_new_document() {
        assert!(validate_new_document("A", "The sky is blue.").is_ok());
        assert!(matches!(
            validate_new_document("", "content"),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            validate_new_document("A", "   \n"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
