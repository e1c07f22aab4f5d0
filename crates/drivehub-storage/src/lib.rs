//! # drivehub-storage
//!
//! The platform's own file storage: a local filesystem provider and the
//! JSON-backed descriptor repository.

pub mod descriptor;
pub mod providers;

pub use descriptor::JsonDescriptorRepository;
pub use providers::LocalStorageProvider;
