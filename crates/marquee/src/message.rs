//! Messages exchanged between the editor and the live preview frame
//!
//! The editor pushes the entire document on every change; there is no
//! partial-update protocol. The frame announces itself once it can receive
//! updates.

use crate::document::SiteConfig;
use serde::{Deserialize, Serialize};

/// Viewport the preview frame should emulate
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportMode {
    #[default]
    Mobile,
    Desktop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreviewMessage {
    /// Full document replacement
    #[serde(rename_all = "camelCase")]
    ConfigUpdate {
        #[serde(alias = "config")]
        document: Box<SiteConfig>,
        #[serde(default, alias = "viewport")]
        viewport_mode: ViewportMode,
    },

    /// Sent by the frame once it is listening
    PreviewReady,
}

impl PreviewMessage {
    pub fn config_update(document: SiteConfig, viewport_mode: ViewportMode) -> Self {
        Self::ConfigUpdate {
            document: Box::new(document),
            viewport_mode,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{registry, Brand};
    use serde_json::json;

    #[test]
    fn test_preview_ready_shape() {
        let value = serde_json::to_value(PreviewMessage::PreviewReady).unwrap();
        assert_eq!(value, json!({ "type": "PREVIEW_READY" }));
    }

    #[test]
    fn test_config_update_shape() {
        let config = registry::default_config(Brand::Netflix);
        let message = PreviewMessage::config_update(config.clone(), ViewportMode::Desktop);
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["type"], "CONFIG_UPDATE");
        assert_eq!(value["viewportMode"], "desktop");
        assert_eq!(value["document"]["navbar"]["logo"], config.navbar.logo);
    }

    #[test]
    fn test_config_update_accepts_editor_field_names() {
        let config = registry::default_config(Brand::Netflix);
        let raw = json!({
            "type": "CONFIG_UPDATE",
            "config": config,
            "viewport": "mobile",
        })
        .to_string();

        match PreviewMessage::from_json(&raw).unwrap() {
            PreviewMessage::ConfigUpdate {
                document,
                viewport_mode,
            } => {
                assert_eq!(*document, config);
                assert_eq!(viewport_mode, ViewportMode::Mobile);
            }
            other => panic!("Expected ConfigUpdate, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_message_type_is_rejected() {
        assert!(PreviewMessage::from_json(r#"{"type":"PATCH"}"#).is_err());
    }
}
