//! Preview and media API models

use marquee::{Brand, SiteConfig};
use marquee_store::PreviewId;
use serde::{Deserialize, Serialize};

/// Request to save a preview
#[derive(Debug, Deserialize)]
pub struct CreatePreviewRequest {
    /// Brand identifier, defaults to the only brand when omitted
    #[serde(default)]
    pub brand: Option<String>,
    pub config: SiteConfig,
}

/// Request to save a preview under a brand given in the path
#[derive(Debug, Deserialize)]
pub struct CreateBrandPreviewRequest {
    pub config: SiteConfig,
}

/// A freshly saved preview
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewCreated {
    pub id: PreviewId,
    pub brand: Brand,
    /// Path of the page that renders this preview
    pub share_path: String,
}

impl PreviewCreated {
    pub fn unscoped(id: PreviewId, brand: Brand) -> Self {
        let share_path = format!("/preview/{}", id);
        Self {
            id,
            brand,
            share_path,
        }
    }

    pub fn scoped(id: PreviewId, brand: Brand) -> Self {
        let share_path = format!("/{}/preview/{}", brand, id);
        Self {
            id,
            brand,
            share_path,
        }
    }
}

/// A stored media file
#[derive(Debug, Serialize)]
pub struct MediaUploaded {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMediaQuery {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigQuery {
    /// Return the image-free variant used to start an editing session
    #[serde(default)]
    pub editing: bool,
}
