//! Listing source implementations.

#[cfg(feature = "drive-api")]
pub mod drive;
pub mod fixed;
pub mod snapshot;

#[cfg(feature = "drive-api")]
pub use drive::DriveApiSource;
pub use fixed::StaticSource;
pub use snapshot::SnapshotSource;
