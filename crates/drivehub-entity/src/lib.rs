//! # drivehub-entity
//!
//! Domain entity models for DriveHub: remote file records as listed by the
//! cloud account, the reconstructed file tree, uploaded file descriptors,
//! and user-facing notifications. All entities derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod descriptor;
pub mod mime;
pub mod notification;
pub mod remote;
pub mod tree;
