//! Uploaded file descriptors.

pub mod model;

pub use model::FileDescriptor;
