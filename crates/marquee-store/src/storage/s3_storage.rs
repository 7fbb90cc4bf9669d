//! S3-compatible storage implementation using MinIO client
//!
//! Works with AWS S3, MinIO and any S3-compatible object storage. For media
//! uploads the bucket (or a CDN in front of it) must be publicly readable so
//! the URLs handed back to the editor resolve.

use async_trait::async_trait;
use bytes::Bytes;
use minio::s3::{
    client::Client, creds::StaticProvider, http::BaseUrl, segmented_bytes::SegmentedBytes,
    types::S3Api,
};
use std::str::FromStr;

use super::blob_storage::{BlobStorage, StorageError, validate_key};

/// Blob storage in a single S3 bucket
pub struct S3Storage {
    client: Client,
    bucket: String,
}

fn env_var(name: &str) -> Result<String, StorageError> {
    std::env::var(name)
        .map_err(|_| StorageError::Backend(format!("{} environment variable not set", name)))
}

fn is_not_found(e: &impl std::fmt::Display) -> bool {
    let message = e.to_string();
    message.contains("NoSuchKey") || message.contains("404")
}

fn backend(action: &str, key: &str, e: impl std::fmt::Display) -> StorageError {
    StorageError::Backend(format!("{} '{}' failed: {}", action, key, e))
}

impl S3Storage {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Reads `S3_BUCKET`, `S3_ACCESS_KEY_ID`, `S3_SECRET_ACCESS_KEY` and
    /// `S3_ENDPOINT_URL`
    pub fn from_env() -> Result<Self, StorageError> {
        let bucket = env_var("S3_BUCKET")?;
        let access_key = env_var("S3_ACCESS_KEY_ID")?;
        let secret_key = env_var("S3_SECRET_ACCESS_KEY")?;
        let endpoint_url = env_var("S3_ENDPOINT_URL")?;

        let base_url = BaseUrl::from_str(&endpoint_url)
            .map_err(|e| StorageError::Backend(format!("Invalid S3_ENDPOINT_URL: {}", e)))?;

        let creds_provider = StaticProvider::new(&access_key, &secret_key, None);

        let client = Client::new(base_url, Some(Box::new(creds_provider)), None, None)
            .map_err(|e| StorageError::Backend(format!("Failed to create S3 client: {}", e)))?;

        Ok(Self::new(client, bucket))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Create the bucket on first start
    pub async fn ensure_bucket(&self) -> Result<(), StorageError> {
        let exists = self
            .client
            .bucket_exists(&self.bucket)
            .send()
            .await
            .map_err(|e| backend("bucket lookup", &self.bucket, e))?
            .exists;

        if !exists {
            tracing::info!("Creating bucket {}", self.bucket);
            self.client
                .create_bucket(&self.bucket)
                .send()
                .await
                .map_err(|e| backend("bucket creation", &self.bucket, e))?;
        }

        Ok(())
    }
}

#[async_trait]
impl BlobStorage for S3Storage {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        validate_key(key)?;

        self.client
            .put_object(&self.bucket, key, SegmentedBytes::from(Bytes::from(data)))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| backend("put", key, e))
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        validate_key(key)?;

        let object = match self.client.get_object(&self.bucket, key).send().await {
            Ok(object) => object,
            Err(e) if is_not_found(&e) => return Err(StorageError::NotFound(key.to_string())),
            Err(e) => return Err(backend("get", key, e)),
        };

        let content = object
            .content
            .to_segmented_bytes()
            .await
            .map_err(|e| backend("read", key, e))?;

        Ok(content.to_bytes().to_vec())
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        validate_key(key)?;

        match self.client.stat_object(&self.bucket, key).send().await {
            Ok(_) => Ok(true),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(backend("stat", key, e)),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;

        self.client
            .delete_object(&self.bucket, key)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| backend("delete", key, e))
    }
}
