//! Local filesystem storage backend

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::blob_storage::{BlobStorage, StorageError, validate_key};

/// File-based storage implementation
///
/// Each key maps to a file below `base_path`; `/` in a key becomes a
/// directory separator.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new file storage with the given base path
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(key
            .split('/')
            .fold(self.base_path.clone(), |path, segment| path.join(segment)))
    }
}

fn io_error(action: &str, key: &str, e: std::io::Error) -> StorageError {
    match e.kind() {
        ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
        ErrorKind::PermissionDenied => {
            StorageError::AccessDenied(format!("Failed to {} '{}': {}", action, key, e))
        }
        _ => StorageError::Backend(format!("Failed to {} '{}': {}", action, key, e)),
    }
}

#[async_trait]
impl BlobStorage for FileSystemStorage {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create directory for", key, e))?;
        }

        fs::write(&path, data)
            .await
            .map_err(|e| io_error("write", key, e))
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key)?;
        fs::read(&path).await.map_err(|e| io_error("read", key, e))
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let path = self.path_for(key)?;
        fs::try_exists(&path)
            .await
            .map_err(|e| io_error("stat", key, e))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Deleting a missing key is not an error, matching the other backends
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("delete", key, e)),
        }
    }
}
