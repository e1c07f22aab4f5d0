//! File descriptor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drivehub_core::types::DescriptorId;

/// A file uploaded into platform storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Unique descriptor identifier.
    pub id: DescriptorId,
    /// Original file name (including extension).
    pub name: String,
    /// Lowercase extension, if the name has one.
    pub extension: Option<String>,
    /// MIME type guessed from the extension.
    pub mime_type: Option<String>,
    /// Content size in bytes.
    pub size_bytes: u64,
    /// Path within the storage provider.
    pub storage_path: String,
    /// When the descriptor was created.
    pub created_at: DateTime<Utc>,
}

impl FileDescriptor {
    /// Create a descriptor for `name`, deriving the extension and the
    /// dated storage path `YYYY/MM/DD/<id>[.<ext>]`.
    pub fn new(name: impl Into<String>, mime_type: Option<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let id = DescriptorId::new();
        let created_at = Utc::now();
        let extension = extension_of(&name);
        let storage_path = storage_path_for(&id, extension.as_deref(), created_at);
        Self {
            id,
            name,
            extension,
            mime_type,
            size_bytes,
            storage_path,
            created_at,
        }
    }
}

/// Get the file extension (lowercase), if any.
///
/// Only ASCII alphanumeric suffixes count.
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit('.')
        .next()
        .filter(|ext| *ext != name && !ext.is_empty())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
}

fn storage_path_for(id: &DescriptorId, extension: Option<&str>, at: DateTime<Utc>) -> String {
    let dir = at.format("%Y/%m/%d");
    match extension {
        Some(ext) => format!("{dir}/{id}.{ext}"),
        None => format!("{dir}/{id}"),
    }
}
