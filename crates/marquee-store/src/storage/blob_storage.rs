//! Blob storage abstraction
//!
//! Both saved previews and uploaded media live in a [`BlobStorage`]. The
//! in-memory implementation here backs tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Backend-level failures, mapped onto domain errors by the callers
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Key not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Invalid key format: {0}")]
    InvalidKey(String),
}

/// Flat key/value object store shared by previews and media
///
/// Keys are `/`-separated paths such as `previews/{id}.json`. Deleting a key
/// that does not exist is not an error.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError>;

    /// Fails with [`StorageError::NotFound`] for unknown keys
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Keys must be non-empty, relative, and free of parent-directory segments
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() || key.len() > 1024 {
        return Err(StorageError::InvalidKey(
            "Key must be between 1 and 1024 characters".into(),
        ));
    }

    if key.starts_with('/') || key.ends_with('/') {
        return Err(StorageError::InvalidKey(
            "Key cannot start or end with '/'".into(),
        ));
    }

    if key.split('/').any(|segment| segment.is_empty() || segment == "..") {
        return Err(StorageError::InvalidKey(format!(
            "Key contains an empty or parent segment: {}",
            key
        )));
    }

    Ok(())
}

type Objects = HashMap<String, Vec<u8>>;

/// Process-local storage, contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryStorage {
    objects: Mutex<Objects>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_objects<T>(&self, f: impl FnOnce(&mut Objects) -> T) -> Result<T, StorageError> {
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| StorageError::Backend("Lock poisoned".into()))?;
        Ok(f(&mut objects))
    }

    /// Stored keys in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.with_objects(|objects| objects.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.with_objects(|objects| objects.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStorage for MemoryStorage {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        validate_key(key)?;
        self.with_objects(|objects| {
            objects.insert(key.to_string(), data);
        })
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.with_objects(|objects| objects.get(key).cloned())?
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.with_objects(|objects| objects.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.with_objects(|objects| {
            objects.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_basic_operations() {
        let storage = MemoryStorage::new();
        let key = "previews/0b8f6a3e-4c1d-4e2a-9f3b-7d6c5e4f3a2b.json";
        let data = br#"{"brand":"netflix"}"#.to_vec();

        storage.put(key, data.clone()).await.unwrap();
        assert_eq!(storage.get(key).await.unwrap(), data);
        assert_eq!(storage.keys(), vec![key.to_string()]);

        assert!(storage.exists(key).await.unwrap());
        assert!(!storage.exists("previews/missing.json").await.unwrap());

        storage.delete(key).await.unwrap();
        assert!(!storage.exists(key).await.unwrap());
        assert!(storage.get(key).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let storage = MemoryStorage::new();

        assert!(matches!(
            storage.get("previews/missing.json").await,
            Err(StorageError::NotFound(key)) if key == "previews/missing.json"
        ));
        // Deleting nothing succeeds
        storage.delete("previews/missing.json").await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_storage_rejects_bad_keys() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.put("../escape", vec![1]).await,
            Err(StorageError::InvalidKey(_))
        ));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_key_validation() {
        assert!(validate_key("preview-images/abc.jpg").is_ok());
        assert!(validate_key("previews/id.json").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key("/starts-with-slash").is_err());
        assert!(validate_key("ends-with-slash/").is_err());
        assert!(validate_key("double//slash").is_err());
        assert!(validate_key("a/../b").is_err());
        assert!(validate_key(&"x".repeat(1025)).is_err());
    }
}
