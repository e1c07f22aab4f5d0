//! # drivehub-remote
//!
//! The remote file listing seam. [`RemoteFileSource`] is what the tree
//! service consumes; implementations read a fixed list, a JSON snapshot on
//! disk, or (with the `drive-api` feature) the Drive v3 REST API.

pub mod source;
pub mod sources;

pub use source::RemoteFileSource;
pub use sources::{SnapshotSource, StaticSource};

#[cfg(feature = "drive-api")]
pub use sources::DriveApiSource;
