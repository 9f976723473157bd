//! docqa core library
//!
//! This crate provides the foundational pieces shared by every docqa crate:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management
//! - Shared document types

pub mod config;
pub mod document;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, RetrievalConfig, SelectionPolicy};
pub use document::{Document, DocumentSummary};
pub use error::{AppError, AppResult};
