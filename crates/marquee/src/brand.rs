//! Brand identifiers

use crate::error::BrandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named configuration template
///
/// The set of brands is fixed at compile time. Identifiers are lowercase and
/// matched exactly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    #[default]
    Netflix,
}

impl Brand {
    /// Every known brand
    pub const ALL: &'static [Brand] = &[Brand::Netflix];

    /// Lowercase identifier used in paths and stored records
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Netflix => "netflix",
        }
    }

    /// Membership test against the known brands
    pub fn is_valid(candidate: &str) -> bool {
        Self::ALL.iter().any(|b| b.as_str() == candidate)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| BrandError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_brand() {
        assert_eq!("netflix".parse::<Brand>().unwrap(), Brand::Netflix);
        assert_eq!(Brand::Netflix.to_string(), "netflix");
    }

    #[test]
    fn test_parse_unknown_brand() {
        let err = "otherbrand".parse::<Brand>().unwrap_err();
        assert_eq!(err, BrandError::Unknown("otherbrand".into()));

        // Matching is exact
        assert!("Netflix".parse::<Brand>().is_err());
        assert!("".parse::<Brand>().is_err());
    }

    #[test]
    fn test_is_valid_is_stable() {
        for _ in 0..3 {
            assert!(Brand::is_valid("netflix"));
            assert!(!Brand::is_valid("hulu"));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Brand::Netflix).unwrap();
        assert_eq!(json, "\"netflix\"");
        let brand: Brand = serde_json::from_str("\"netflix\"").unwrap();
        assert_eq!(brand, Brand::Netflix);
    }
}
