//! Error types for the preview store

use marquee::DocumentError;
use thiserror::Error;

use crate::storage::StorageError;

/// Preview store errors
///
/// Unknown, malformed and brand-mismatched identifiers all collapse into
/// [`StoreError::NotFound`] so callers cannot probe for previews saved under
/// another brand.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Preview not found: {0}")]
    NotFound(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] DocumentError),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for StoreError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(key) => StoreError::NotFound(key),
            other => StoreError::PersistenceUnavailable(other.to_string()),
        }
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
