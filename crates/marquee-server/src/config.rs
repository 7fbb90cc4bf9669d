//! Server configuration management

use crate::error::{ApiError, Result};
use marquee_store::{MediaConfig, PREVIEW_KEY_PREFIX, storage::blob_storage::validate_key};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Which blob storage backs previews and media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Fs,
    S3,
}

impl FromStr for StorageBackend {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "fs" | "file" | "filesystem" => Ok(Self::Fs),
            "s3" => Ok(Self::S3),
            other => Err(ApiError::Config(format!(
                "Invalid STORAGE_BACKEND value: {}",
                other
            ))),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    pub storage_backend: StorageBackend,

    /// Base directory for the filesystem backend
    pub storage_path: PathBuf,

    /// Public URL prefix for uploaded media
    pub media_public_base_url: String,

    /// Key prefix for uploaded media inside the blob storage
    pub media_key_prefix: String,

    /// Optional `?quality=N` hint appended to media URLs
    pub media_transform_quality: Option<u8>,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,

    /// Request body limit, kept above the media ceiling so oversized
    /// uploads reach validation and get a descriptive error
    pub max_body_bytes: usize,
}

fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T> {
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| ApiError::Config(format!("Invalid {} value", name)))
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port: u16 = parse_var("PORT", "3000")?;

        let media_transform_quality = match std::env::var("MEDIA_TRANSFORM_QUALITY") {
            Ok(value) if !value.trim().is_empty() => Some(value.trim().parse().map_err(|_| {
                ApiError::Config("Invalid MEDIA_TRANSFORM_QUALITY value".to_string())
            })?),
            _ => None,
        };

        let config = Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            storage_backend: std::env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "fs".to_string())
                .parse()?,
            storage_path: std::env::var("STORAGE_PATH")
                .unwrap_or_else(|_| "./data".to_string())
                .into(),
            media_public_base_url: std::env::var("MEDIA_PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}/media", port)),
            media_key_prefix: std::env::var("MEDIA_KEY_PREFIX")
                .unwrap_or_else(|_| "preview-images".to_string()),
            media_transform_quality,
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_body_bytes: parse_var("MAX_BODY_BYTES", "6291456")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would let media routes reach preview records
    pub fn validate(&self) -> Result<()> {
        let prefix = self.media_key_prefix.as_str();

        validate_key(prefix)
            .map_err(|e| ApiError::Config(format!("Invalid MEDIA_KEY_PREFIX value: {}", e)))?;

        if prefix.split('/').next() == Some(PREVIEW_KEY_PREFIX) {
            return Err(ApiError::Config(format!(
                "MEDIA_KEY_PREFIX must not start with '{}', it is reserved for previews",
                PREVIEW_KEY_PREFIX
            )));
        }

        Ok(())
    }

    pub fn media_config(&self) -> MediaConfig {
        MediaConfig {
            public_base_url: self.media_public_base_url.clone(),
            key_prefix: self.media_key_prefix.clone(),
            transform_quality: self.media_transform_quality,
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            storage_backend: StorageBackend::Fs,
            storage_path: PathBuf::from("./data"),
            media_public_base_url: "http://localhost:3000/media".to_string(),
            media_key_prefix: "preview-images".to_string(),
            media_transform_quality: None,
            cors_origins: vec!["*".to_string()],
            max_body_bytes: 6 * 1024 * 1024,
        }
    }
}
