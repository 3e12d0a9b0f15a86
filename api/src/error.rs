//! Error handling for the HTTP API
//!
//! Maps core todo errors and axum extractor rejections to HTTP responses
//! with a JSON `{"error": CODE, "message": text}` body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_core::TodoError;

/// HTTP API errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// Malformed request rejected by an extractor, with the status it reported
    #[error("{message}")]
    BadRequest { status: StatusCode, message: String },

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest { status, .. } => *status,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code sent in the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::BadRequest { status, .. } => match *status {
                StatusCode::UNPROCESSABLE_ENTITY => "VALIDATION_ERROR",
                StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                _ => "BAD_REQUEST",
            },
            ApiError::Unavailable(_) => "SERVICE_UNAVAILABLE",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to clients
    fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            ApiError::Unavailable(_) => "Database is unavailable".to_string(),
            other => other.to_string(),
        }
    }

    /// Health check failures are reported as 503 rather than 500
    pub fn unavailable(err: TodoError) -> Self {
        ApiError::Unavailable(err.to_string())
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(msg) => ApiError::NotFound(msg),
            TodoError::Validation(msg) => ApiError::Validation(msg),
            TodoError::Database(_) | TodoError::Configuration(_) | TodoError::Internal(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Internal(detail) => tracing::error!(error = %detail, "Request failed"),
            ApiError::Unavailable(detail) => tracing::warn!(error = %detail, "Health check failed"),
            other => tracing::debug!(status = status.as_u16(), error = %other, "Request rejected"),
        }

        let body = json!({
            "error": self.error_code(),
            "message": self.public_message(),
        });

        (status, Json(body)).into_response()
    }
}
