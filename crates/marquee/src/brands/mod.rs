//! Bundled brand defaults

mod netflix;

use crate::{Brand, SiteConfig};

/// Build the baseline document for a brand
pub(crate) fn baseline(brand: Brand) -> SiteConfig {
    match brand {
        Brand::Netflix => netflix::config(),
    }
}
