//! Process-wide brand registry
//!
//! The registry maps every [`Brand`] to its baseline [`SiteConfig`]. It is
//! built once on first access and never mutated afterwards. Accessors that
//! hand out documents always return an owned copy, so callers are free to
//! edit what they receive without affecting the baseline or each other.

use crate::brands;
use crate::document::{Show, SiteConfig};
use crate::Brand;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static REGISTRY: Lazy<HashMap<Brand, SiteConfig>> = Lazy::new(|| {
    Brand::ALL
        .iter()
        .map(|&brand| (brand, brands::baseline(brand)))
        .collect()
});

fn baseline(brand: Brand) -> &'static SiteConfig {
    // Every variant is inserted when the map is built
    &REGISTRY[&brand]
}

/// Membership test against the known brands
pub fn is_valid(candidate: &str) -> bool {
    Brand::is_valid(candidate)
}

/// Independent copy of a brand's baseline document
pub fn default_config(brand: Brand) -> SiteConfig {
    baseline(brand).clone()
}

/// Baseline copy with every image cleared, for a fresh editing session
pub fn default_config_for_editing(brand: Brand) -> SiteConfig {
    let mut config = default_config(brand);
    config.clear_images();
    config
}

/// Look up a show in the brand's baseline collection
pub fn show_by_id(brand: Brand, id: u32) -> Option<Show> {
    baseline(brand).find_show(id).cloned()
}
