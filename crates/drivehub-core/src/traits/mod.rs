//! Core traits defined in `drivehub-core` and implemented by other crates.

pub mod repository;
pub mod storage;

pub use repository::Repository;
pub use storage::{ByteStream, StorageProvider};
