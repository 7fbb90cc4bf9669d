//! Marquee models the configuration of a customizable streaming-service
//! landing page: the document an editor mutates, the brand defaults it
//! starts from, and the messages that drive a live preview frame.

pub mod brand;
mod brands;
pub mod document;
pub mod error;
pub mod message;
pub mod registry;

// Re-export core types
pub use brand::Brand;
pub use document::{
    BottomNav, BottomNavItem, ContentRow, ContentRowItem, Hero, ModalLabels, NavLink, Navbar,
    ResolvedRow, Show, SiteConfig,
};
pub use error::{BrandError, DocumentError};
pub use message::{PreviewMessage, ViewportMode};
