//! Error responses for the HTTP API.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use docqa_core::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An [`AppError`] paired with the message shown to clients on server errors.
///
/// Caller mistakes answer 400 with their own message. Everything else
/// answers 500 with the fixed context message and is logged in full.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    context: &'static str,
}

impl ApiError {
    pub fn new(context: &'static str, error: AppError) -> Self {
        Self { error, context }
    }

    /// Treat a malformed JSON body as invalid input.
    pub fn from_rejection(context: &'static str, rejection: JsonRejection) -> Self {
        Self::new(context, AppError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.error {
            AppError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            error => {
                tracing::error!(kind = error.kind(), "{}: {}", self.context, error);
                (StatusCode::INTERNAL_SERVER_ERROR, self.context.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Attach a client-facing context message to a failed result.
pub trait ApiContext<T> {
    fn api_context(self, context: &'static str) -> Result<T, ApiError>;
}

impl<T> ApiContext<T> for AppResult<T> {
    fn api_context(self, context: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(context, e))
    }
}
