//! Error handling for the API server

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marquee_store::{MediaError, StorageError, StoreError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Store(e) => match e {
                StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "Preview not found".to_string()),
                StoreError::InvalidDocument(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                StoreError::PersistenceUnavailable(_) => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Preview storage is unavailable, please try again".to_string(),
                ),
                StoreError::Serialization(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                ),
            },
            ApiError::Media(e) => match e {
                MediaError::FileTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, e.to_string()),
                MediaError::InvalidType { .. } => {
                    (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string())
                }
                MediaError::UploadFailed(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
                MediaError::DeleteFailed(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                ),
            },
            ApiError::Storage(StorageError::NotFound(_) | StorageError::InvalidKey(_)) => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            ApiError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            error!("{}", self);
        }

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

// Convenience functions for common errors
impl ApiError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(what.to_string())
    }

    pub fn bad_request(msg: &str) -> Self {
        Self::BadRequest(msg.to_string())
    }
}
