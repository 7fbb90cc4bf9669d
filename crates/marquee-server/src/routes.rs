//! HTTP routes

pub mod brands;
pub mod media;
pub mod previews;
