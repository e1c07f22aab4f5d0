//! Batch upload into platform storage.

pub mod pending;
pub mod service;

pub use pending::{PendingUpload, UploadContent};
pub use service::{UploadFailure, UploadReport, UploadService};
