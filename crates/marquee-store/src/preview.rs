//! Write-once preview snapshots keyed by a random identifier
//!
//! A preview is a [`SiteConfig`] saved together with the [`Brand`] it was
//! created under. Records are stored as JSON at `previews/{id}.json` and are
//! never updated or deleted by this crate.

use marquee::{Brand, SiteConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::storage::{BlobStorage, StorageError};

const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// First key segment of every preview record, reserved for this module
pub const PREVIEW_KEY_PREFIX: &str = "previews";

/// Identifier of a saved preview
///
/// Always the 36-character lowercase hyphenated hex form, e.g.
/// `1b4e28ba-2fa1-41d2-883f-0016d3cca427`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PreviewId(String);

impl PreviewId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Check the 8-4-4-4-12 hex shape, ignoring case
    pub fn is_valid(candidate: &str) -> bool {
        let mut groups = candidate.split('-');
        let shape_ok = GROUPS.iter().all(|&len| {
            groups
                .next()
                .is_some_and(|g| g.len() == len && g.bytes().all(|b| b.is_ascii_hexdigit()))
        });
        shape_ok && groups.next().is_none()
    }

    /// Parse and normalize to lowercase
    pub fn parse(candidate: &str) -> Option<Self> {
        Self::is_valid(candidate).then(|| Self(candidate.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn storage_key(&self) -> String {
        format!("{}/{}.json", PREVIEW_KEY_PREFIX, self.0)
    }
}

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PreviewId {
    type Err = StoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StoreError::NotFound(s.to_string()))
    }
}

impl TryFrom<String> for PreviewId {
    type Error = StoreError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PreviewId> for String {
    fn from(id: PreviewId) -> Self {
        id.0
    }
}

/// A persisted preview record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPreview {
    pub id: PreviewId,
    pub brand: Brand,
    pub config: SiteConfig,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Save and load previews on top of any [`BlobStorage`]
#[derive(Clone)]
pub struct PreviewStore {
    storage: Arc<dyn BlobStorage>,
}

impl PreviewStore {
    pub fn new(storage: Arc<dyn BlobStorage>) -> Self {
        Self { storage }
    }

    /// Persist a document under a new identifier
    ///
    /// Performs exactly one write. Backend failures surface as
    /// [`StoreError::PersistenceUnavailable`] and are not retried.
    pub async fn save(&self, brand: Brand, config: &SiteConfig) -> Result<PreviewId> {
        config.validate()?;

        let record = StoredPreview {
            id: PreviewId::generate(),
            brand,
            config: config.clone(),
            created_at: OffsetDateTime::now_utc(),
        };
        let bytes = serde_json::to_vec(&record)?;

        self.storage
            .put(&record.id.storage_key(), bytes)
            .await
            .map_err(|e| {
                error!("Failed to save preview {}: {}", record.id, e);
                StoreError::PersistenceUnavailable(e.to_string())
            })?;

        info!("Saved preview {} for brand {}", record.id, brand);
        Ok(record.id)
    }

    /// Load a stored document, optionally scoped to a brand
    ///
    /// The brand filter is a raw identifier so that lookups under unknown
    /// brands fail the same way as mismatched ones.
    pub async fn load(&self, id: &str, expected_brand: Option<&str>) -> Result<SiteConfig> {
        self.load_record(id, expected_brand)
            .await
            .map(|record| record.config)
    }

    /// Load the full stored record, optionally scoped to a brand
    ///
    /// Malformed identifiers are rejected before the backend is consulted.
    pub async fn load_record(
        &self,
        id: &str,
        expected_brand: Option<&str>,
    ) -> Result<StoredPreview> {
        let Some(preview_id) = PreviewId::parse(id) else {
            debug!("Rejected malformed preview id {:?}", id);
            return Err(StoreError::NotFound(id.to_string()));
        };

        let bytes = match self.storage.get(&preview_id.storage_key()).await {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound(_)) => {
                debug!("Preview {} not found", preview_id);
                return Err(StoreError::NotFound(id.to_string()));
            }
            Err(e) => {
                error!("Failed to load preview {}: {}", preview_id, e);
                return Err(StoreError::PersistenceUnavailable(e.to_string()));
            }
        };

        let record: StoredPreview = serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Stored preview {} could not be decoded: {}", preview_id, e);
            StoreError::PersistenceUnavailable(format!("Corrupt preview record: {}", e))
        })?;

        if let Some(expected) = expected_brand {
            if record.brand.as_str() != expected {
                debug!(
                    "Preview {} requested under brand {} but saved under {}",
                    preview_id, expected, record.brand
                );
                return Err(StoreError::NotFound(id.to_string()));
            }
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_valid_lowercase() {
        for _ in 0..16 {
            let id = PreviewId::generate();
            assert_eq!(id.as_str().len(), 36);
            assert!(PreviewId::is_valid(id.as_str()));
            assert_eq!(id.as_str(), id.as_str().to_ascii_lowercase());
        }
    }

    #[test]
    fn test_id_shape_validation() {
        assert!(PreviewId::is_valid("1b4e28ba-2fa1-41d2-883f-0016d3cca427"));
        assert!(PreviewId::is_valid("1B4E28BA-2FA1-41D2-883F-0016D3CCA427"));

        assert!(!PreviewId::is_valid(""));
        assert!(!PreviewId::is_valid("not-a-uuid"));
        assert!(!PreviewId::is_valid("1b4e28ba2fa141d2883f0016d3cca427"));
        assert!(!PreviewId::is_valid("{1b4e28ba-2fa1-41d2-883f-0016d3cca427}"));
        assert!(!PreviewId::is_valid("1b4e28ba-2fa1-41d2-883f-0016d3cca427-"));
        assert!(!PreviewId::is_valid("1b4e28ba-2fa1-41d2-883f-0016d3cca42g"));
        assert!(!PreviewId::is_valid("1b4e28ba-2fa1-41d2-883f-0016d3cca4270"));
        assert!(!PreviewId::is_valid("../../etc/passwd-0000-0000-000000000000"));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let id = PreviewId::parse("1B4E28BA-2FA1-41D2-883F-0016D3CCA427").unwrap();
        assert_eq!(id.as_str(), "1b4e28ba-2fa1-41d2-883f-0016d3cca427");
        assert_eq!(
            id.storage_key(),
            "previews/1b4e28ba-2fa1-41d2-883f-0016d3cca427.json"
        );
    }

    #[test]
    fn test_id_deserialization_validates() {
        let ok: std::result::Result<PreviewId, _> =
            serde_json::from_str("\"1b4e28ba-2fa1-41d2-883f-0016d3cca427\"");
        assert!(ok.is_ok());

        let bad: std::result::Result<PreviewId, _> = serde_json::from_str("\"abc\"");
        assert!(bad.is_err());
    }
}
