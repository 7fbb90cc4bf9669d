//! Error types for the marquee library
//!
//! Errors are split by domain: brand resolution and document invariants.

use thiserror::Error;

/// Brand-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrandError {
    #[error("Unknown brand: {0}")]
    Unknown(String),
}

/// Document invariant violations
///
/// Dangling show references inside content rows are deliberately not an
/// error here; they are filtered out when rows are resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Duplicate show id {0}")]
    DuplicateShowId(u32),

    #[error("Content row index {index} out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },
}
