//! # Marquee Store
//!
//! Persistence for marquee site configurations:
//! - Write-once preview snapshots addressed by a random identifier
//! - Brand-scoped retrieval that fails closed
//! - Validated image uploads behind a swappable media backend
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use marquee::{Brand, registry};
//! use marquee_store::{MemoryStorage, PreviewStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PreviewStore::new(Arc::new(MemoryStorage::new()));
//!
//! let config = registry::default_config(Brand::Netflix);
//! let id = store.save(Brand::Netflix, &config).await?;
//!
//! let loaded = store.load(id.as_str(), Some("netflix")).await?;
//! assert_eq!(loaded, config);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod media;
pub mod preview;
pub mod storage;

pub use error::{Result, StoreError};
pub use media::{BlobMediaStore, MediaConfig, MediaError, MediaFile, MediaStore};
pub use preview::{PREVIEW_KEY_PREFIX, PreviewId, PreviewStore, StoredPreview};
pub use storage::{BlobStorage, MemoryStorage, StorageError};

#[cfg(feature = "fs")]
pub use storage::file_storage::FileSystemStorage;

#[cfg(feature = "s3")]
pub use storage::s3_storage::S3Storage;
