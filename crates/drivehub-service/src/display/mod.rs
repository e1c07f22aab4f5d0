//! Display-layer helpers: preview locators and type icons.

pub mod icon;
pub mod preview;

pub use icon::IconCatalog;
pub use preview::PreviewService;
