//! Error types for docqa.
//!
//! This module defines a unified error enum covering caller mistakes,
//! collaborator failures (document store, LLM) and local configuration
//! problems.

use thiserror::Error;

/// Unified error type for docqa.
///
/// All fallible functions return `Result<T, AppError>`. "No evidence" is not
/// an error: it is a successful answer carrying a refusal sentinel.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed caller input (question, document name/content)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document store could not be reached or failed a query
    #[error("Document store unavailable: {0}")]
    StoreUnavailable(String),

    /// The LLM provider was unreachable, timed out or returned an error
    #[error("Upstream LLM failure: {0}")]
    Upstream(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Prompt assembly errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Whether the error was caused by the caller rather than the service.
    ///
    /// Transports map client errors to 400-class responses and everything
    /// else to 500-class responses.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }

    /// Short machine-readable kind, used in logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::StoreUnavailable(_) => "store_unavailable",
            AppError::Upstream(_) => "upstream_failure",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
            AppError::Prompt(_) => "prompt",
            AppError::Serialization(_) => "serialization",
            AppError::Other(_) => "other",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::InvalidInput("Question is required".into()).is_client_error());
        assert!(!AppError::StoreUnavailable("db down".into()).is_client_error());
        assert!(!AppError::Upstream("timeout".into()).is_client_error());
    }

    #[test]
    fn test_kind_distinguishes_upstream() {
        assert_eq!(AppError::Upstream("x".into()).kind(), "upstream_failure");
        assert_ne!(
            AppError::Upstream("x".into()).kind(),
            AppError::StoreUnavailable("x".into()).kind()
        );
    }

    #[test]
    fn test_from_serde_json() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
