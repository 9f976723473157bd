//! SQLite-backed document store.

use crate::store::{validate_new_document, DocumentStore};
use chrono::{DateTime, Utc};
use docqa_core::{AppError, AppResult, Document, DocumentSummary};
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Document store persisted in a single SQLite file.
///
/// Queries run on the blocking thread pool; the connection is shared behind
/// a mutex.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path`.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::StoreUnavailable(format!("Failed to create database directory: {}", e))
            })?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to open SQLite database: {}", e)))?;
        init_schema(&conn)?;

        tracing::debug!("Opened document store at {:?}", db_path);
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(db_path.to_path_buf()),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to open SQLite database: {}", e)))?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    /// Database file path, if file-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn with_conn<T, F>(&self, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| AppError::StoreUnavailable("Database lock poisoned".to_string()))?;
            f(&guard)
        })
        .await
        .map_err(|e| AppError::StoreUnavailable(format!("Database task failed: {}", e)))?
    }
}

fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .map_err(|e| AppError::StoreUnavailable(format!("Failed to create tables: {}", e)))?;

    Ok(())
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[async_trait::async_trait]
impl DocumentStore for SqliteStore {
    async fn list_documents(&self) -> AppResult<Vec<DocumentSummary>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, name, created_at FROM documents ORDER BY seq DESC")
                .map_err(|e| AppError::StoreUnavailable(format!("Failed to prepare query: {}", e)))?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(DocumentSummary {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        created_at: parse_timestamp(row, 2)?,
                    })
                })
                .map_err(|e| AppError::StoreUnavailable(format!("Failed to list documents: {}", e)))?;

            rows.collect::<Result<Vec<_>, _>>()
                .map_err(|e| AppError::StoreUnavailable(format!("Failed to read document row: {}", e)))
        })
        .await
    }

    async fn insert_document(&self, name: &str, content: &str) -> AppResult<Document> {
        validate_new_document(name, content)?;

        let document = Document::new(uuid::Uuid::new_v4().to_string(), name.trim(), content);
        let row = document.clone();

        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO documents (id, name, content, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![row.id, row.name, row.content, row.created_at.to_rfc3339()],
            )
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to insert document: {}", e)))?;
            Ok(())
        })
        .await?;

        tracing::info!("Stored document '{}' ({})", document.name, document.id);
        Ok(document)
    }

    async fn fetch_all_documents(&self) -> AppResult<Vec<Document>> {
        let documents = self
            .with_conn(|conn| {
                let mut stmt = conn
                    .prepare("SELECT id, name, content, created_at FROM documents ORDER BY seq ASC")
                    .map_err(|e| {
                        AppError::StoreUnavailable(format!("Failed to prepare query: {}", e))
                    })?;

                let rows = stmt
                    .query_map([], |row| {
                        Ok(Document {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            content: row.get(2)?,
                            created_at: parse_timestamp(row, 3)?,
                        })
                    })
                    .map_err(|e| {
                        AppError::StoreUnavailable(format!("Failed to fetch documents: {}", e))
                    })?;

                rows.collect::<Result<Vec<_>, _>>().map_err(|e| {
                    AppError::StoreUnavailable(format!("Failed to read document row: {}", e))
                })
            })
            .await?;

        tracing::debug!("Fetched {} documents", documents.len());
        Ok(documents)
    }

    async fn ping(&self) -> AppResult<()> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| AppError::StoreUnavailable(format!("Database ping failed: {}", e)))?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/.docqa/documents.db");

        let store = SqliteStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_and_fetch_in_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        let a = store.insert_document("A", "The sky is blue.").await.unwrap();
        store.insert_document("B", "Grass is green.").await.unwrap();

        let fetched = store.fetch_all_documents().await.unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0].id, a.id);
        assert_eq!(fetched[0].content, "The sky is blue.");
        assert_eq!(fetched[1].name, "B");
    }

    #[tokio::test]
    async fn test_list_is_newest_first_without_content() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_document("older", "one").await.unwrap();
        store.insert_document("newer", "two").await.unwrap();

        let listed = store.list_documents().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[tokio::test]
    async fn test_insert_rejects_missing_fields() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(matches!(
            store.insert_document("", "content").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            store.insert_document("name", "").await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(store.fetch_all_documents().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_documents_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("documents.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert_document("A", "Persistent text").await.unwrap();
        }

        let reopened = SqliteStore::open(&path).unwrap();
        let fetched = reopened.fetch_all_documents().await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].content, "Persistent text");
    }
}
