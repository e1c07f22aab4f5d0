//! # drivehub-service
//!
//! Service layer for the drive screen. [`TreeBuilder`] turns the flat
//! remote listing into a [`FileTree`](drivehub_entity::tree::FileTree);
//! the other services cover preview locators, icons, and uploads, and
//! [`DriveScreen`] wires them together.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod display;
pub mod screen;
pub mod tree;
pub mod upload;

pub use display::{IconCatalog, PreviewService};
pub use screen::{DriveScreen, ScreenState, Selection};
pub use tree::{TreeBuilder, TreeService};
pub use upload::{PendingUpload, UploadContent, UploadFailure, UploadReport, UploadService};
