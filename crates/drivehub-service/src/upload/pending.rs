//! Files queued for upload.

use std::path::{Path, PathBuf};

use bytes::Bytes;

use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_core::types::UploadId;

/// Where the bytes of a pending upload come from.
#[derive(Debug, Clone)]
pub enum UploadContent {
    /// Content already in memory.
    Bytes(Bytes),
    /// Content streamed from a local file.
    File(PathBuf),
}

/// A file the operator asked to upload.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    /// Tracking id for this request.
    pub id: UploadId,
    /// Original file name.
    pub name: String,
    /// Content source.
    pub content: UploadContent,
}

impl PendingUpload {
    /// Upload in-memory content under `name`.
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            id: UploadId::new(),
            name: name.into(),
            content: UploadContent::Bytes(data.into()),
        }
    }

    /// Upload a local file, named after its last path component.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::validation(format!("Not an uploadable file path: {}", path.display()))
            })?;
        Ok(Self {
            id: UploadId::new(),
            name: name.to_string(),
            content: UploadContent::File(path.to_path_buf()),
        })
    }
}
