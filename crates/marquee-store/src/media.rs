//! Image uploads for document image fields
//!
//! Files are validated up front (size and type), then handed to a
//! [`MediaStore`]. The store returns a public URL that gets substituted into
//! the document; the blob itself is only ever referenced by that URL.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::storage::BlobStorage;

/// Upload ceiling, inclusive
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

pub const ALLOWED_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/heic",
    "image/heif",
    "image/bmp",
    "image/tiff",
];

/// Browsers often report no or a generic MIME type for these
const FALLBACK_EXTENSIONS: &[&str] = &["heic", "heif"];

const DEFAULT_EXTENSION: &str = "jpg";

fn megabytes(size: &u64) -> String {
    format!("{:.1}", *size as f64 / 1024.0 / 1024.0)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("File size must be less than 5MB. Your file is {}MB.", megabytes(.size))]
    FileTooLarge { size: u64 },

    #[error(
        "Unsupported file format. Please upload a JPEG, PNG, GIF, WebP, HEIC, or HEIF image."
    )]
    InvalidType {
        content_type: String,
        file_name: String,
    },

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// Only ever logged, see [`MediaStore::delete`]
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

/// An uploaded file as received from the client
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl MediaFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Original extension, or `jpg` when there is none
    pub fn extension(&self) -> &str {
        extension_of(&self.file_name).unwrap_or(DEFAULT_EXTENSION)
    }
}

fn extension_of(file_name: &str) -> Option<&str> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_alphanumeric()))
}

/// Check size and type without touching any backend
pub fn validate(file: &MediaFile) -> Result<(), MediaError> {
    if file.size() > MAX_FILE_SIZE {
        return Err(MediaError::FileTooLarge { size: file.size() });
    }

    let allowed_type = ALLOWED_TYPES.contains(&file.content_type.as_str());
    let allowed_extension = extension_of(&file.file_name).is_some_and(|ext| {
        FALLBACK_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    });

    if !allowed_type && !allowed_extension {
        return Err(MediaError::InvalidType {
            content_type: file.content_type.clone(),
            file_name: file.file_name.clone(),
        });
    }

    Ok(())
}

/// MIME type to serve a stored file with, by extension
pub fn content_type_for(file_name: &str) -> &'static str {
    match extension_of(file_name)
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("bmp") => "image/bmp",
        Some("tif" | "tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Last path segment of a media URL, ignoring any query string
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    without_query
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
}

/// Swappable media backend
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Validate and store a file, returning its public URL
    async fn upload(&self, file: MediaFile) -> Result<String, MediaError>;

    /// Best-effort removal of a previously uploaded file
    ///
    /// Failures are logged and never returned: deletion is cleanup that runs
    /// as a side effect of other actions, such as replacing an image.
    async fn delete(&self, url: &str);
}

/// Where uploaded media lives and how it is addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    /// Public URL prefix under which stored files resolve
    pub public_base_url: String,
    /// Key prefix inside the blob storage
    pub key_prefix: String,
    /// Optional quality hint appended as `?quality=N` for backends that
    /// transform images on the fly
    pub transform_quality: Option<u8>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            public_base_url: "/media".to_string(),
            key_prefix: "preview-images".to_string(),
            transform_quality: None,
        }
    }
}

impl MediaConfig {
    /// Storage key for a stored file name
    pub fn key_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.key_prefix.trim_end_matches('/'), file_name)
    }

    fn url_for(&self, file_name: &str) -> String {
        let url = format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            file_name
        );
        match self.transform_quality {
            Some(quality) => format!("{}?quality={}", url, quality),
            None => url,
        }
    }
}

/// [`MediaStore`] on top of any [`BlobStorage`]
#[derive(Clone)]
pub struct BlobMediaStore {
    storage: Arc<dyn BlobStorage>,
    config: MediaConfig,
}

impl BlobMediaStore {
    pub fn new(storage: Arc<dyn BlobStorage>, config: MediaConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }
}

#[async_trait]
impl MediaStore for BlobMediaStore {
    async fn upload(&self, file: MediaFile) -> Result<String, MediaError> {
        validate(&file)?;

        let file_name = format!("{}.{}", Uuid::new_v4(), file.extension());
        let key = self.config.key_for(&file_name);
        let size = file.size();

        self.storage
            .put(&key, file.data)
            .await
            .map_err(|e| MediaError::UploadFailed(e.to_string()))?;

        info!("Uploaded {} ({} bytes) as {}", file.file_name, size, key);
        Ok(self.config.url_for(&file_name))
    }

    async fn delete(&self, url: &str) {
        let Some(file_name) = file_name_from_url(url) else {
            debug!("No file name in media URL {:?}, nothing to delete", url);
            return;
        };

        let key = self.config.key_for(file_name);
        match self.storage.delete(&key).await {
            Ok(()) => debug!("Deleted media {}", key),
            Err(e) => error!(
                "Failed to delete image: {}",
                MediaError::DeleteFailed(e.to_string())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: &str, size: usize) -> MediaFile {
        MediaFile::new(name, content_type, vec![0u8; size])
    }

    #[test]
    fn test_size_boundary_is_inclusive() {
        let exact = file("hero.jpg", "image/jpeg", MAX_FILE_SIZE as usize);
        assert!(validate(&exact).is_ok());

        let over = file("hero.jpg", "image/jpeg", MAX_FILE_SIZE as usize + 1);
        assert_eq!(
            validate(&over),
            Err(MediaError::FileTooLarge {
                size: MAX_FILE_SIZE + 1
            })
        );
    }

    #[test]
    fn test_too_large_message_reports_size() {
        let err = MediaError::FileTooLarge {
            size: 7 * 1024 * 1024 + 300 * 1024,
        };
        assert_eq!(
            err.to_string(),
            "File size must be less than 5MB. Your file is 7.3MB."
        );
    }

    #[test]
    fn test_type_checks() {
        assert!(validate(&file("a.png", "image/png", 10)).is_ok());
        assert!(validate(&file("a.tiff", "image/tiff", 10)).is_ok());

        // Extension fallback for HEIC/HEIF, case-insensitive
        assert!(validate(&file("photo.HEIC", "application/octet-stream", 10)).is_ok());
        assert!(validate(&file("photo.heif", "", 10)).is_ok());

        assert!(matches!(
            validate(&file("notes.txt", "text/plain", 10)),
            Err(MediaError::InvalidType { .. })
        ));
        assert!(matches!(
            validate(&file("movie.mp4", "video/mp4", 10)),
            Err(MediaError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_size_checked_before_type() {
        let err = validate(&file("notes.txt", "text/plain", MAX_FILE_SIZE as usize + 1));
        assert!(matches!(err, Err(MediaError::FileTooLarge { .. })));
    }

    #[test]
    fn test_extension() {
        assert_eq!(file("a.png", "image/png", 1).extension(), "png");
        assert_eq!(file("archive.tar.GZ", "", 1).extension(), "GZ");
        assert_eq!(file("no-extension", "image/png", 1).extension(), "jpg");
        assert_eq!(file("trailing.", "image/png", 1).extension(), "jpg");
        assert_eq!(file("weird.p/ng", "image/png", 1).extension(), "jpg");
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://cdn.example.com/media/abc.jpg?quality=90"),
            Some("abc.jpg")
        );
        assert_eq!(file_name_from_url("/media/abc.png"), Some("abc.png"));
        assert_eq!(file_name_from_url("https://cdn.example.com/media/"), None);
        assert_eq!(file_name_from_url(""), None);
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("a.webp"), "image/webp");
        assert_eq!(content_type_for("a"), "application/octet-stream");
    }

    #[test]
    fn test_url_with_transform_hint() {
        let config = MediaConfig {
            public_base_url: "https://cdn.example.com/media/".into(),
            key_prefix: "preview-images".into(),
            transform_quality: Some(90),
        };
        assert_eq!(
            config.url_for("abc.jpg"),
            "https://cdn.example.com/media/abc.jpg?quality=90"
        );
        assert_eq!(config.key_for("abc.jpg"), "preview-images/abc.jpg");
    }
}
