//! Shared test backends

#![allow(dead_code)]

use async_trait::async_trait;
use marquee_store::{BlobStorage, MemoryStorage, StorageError};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Wraps a memory backend and counts every call that reaches it
#[derive(Default)]
pub struct CountingStorage {
    pub inner: MemoryStorage,
    pub gets: AtomicUsize,
    pub puts: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl CountingStorage {
    pub fn calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
            + self.puts.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStorage for CountingStorage {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, data).await
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.inner.exists(key).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(key).await
    }
}

/// Backend whose every operation fails
#[derive(Default)]
pub struct FailingStorage {
    pub deletes: AtomicUsize,
}

#[async_trait]
impl BlobStorage for FailingStorage {
    async fn put(&self, _key: &str, _data: Vec<u8>) -> Result<(), StorageError> {
        Err(StorageError::Backend("bucket unreachable".into()))
    }

    async fn get(&self, _key: &str) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::Backend("bucket unreachable".into()))
    }

    async fn exists(&self, _key: &str) -> Result<bool, StorageError> {
        Err(StorageError::Backend("bucket unreachable".into()))
    }

    async fn delete(&self, _key: &str) -> Result<(), StorageError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Backend("bucket unreachable".into()))
    }
}

/// In-memory sink for captured log output
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
