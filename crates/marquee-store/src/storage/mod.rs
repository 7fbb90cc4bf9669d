//! Storage backends for previews and media

pub mod blob_storage;

pub use blob_storage::{BlobStorage, MemoryStorage, StorageError};

// Filesystem implementation
#[cfg(feature = "fs")]
pub mod file_storage;

// S3 implementation
#[cfg(feature = "s3")]
pub mod s3_storage;
