//! JSON snapshot listing source.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use drivehub_core::error::{AppError, ErrorKind};
use drivehub_core::result::AppResult;
use drivehub_entity::remote::RemoteFileRecord;

use crate::source::RemoteFileSource;

/// Accepted snapshot layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Snapshot {
    /// A Drive `files.list` page.
    Page { files: Vec<RemoteFileRecord> },
    /// A bare array of records.
    Records(Vec<RemoteFileRecord>),
}

/// Reads the listing from a JSON file exported from the cloud account.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RemoteFileSource for SnapshotSource {
    fn source_type(&self) -> &str {
        "snapshot"
    }

    async fn list_files(&self) -> AppResult<Vec<RemoteFileRecord>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No listing snapshot, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Failed to read listing snapshot: {}", self.path.display()),
                    e,
                ));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let snapshot: Snapshot = serde_json::from_slice(&raw)?;
        let records = match snapshot {
            Snapshot::Page { files } => files,
            Snapshot::Records(records) => records,
        };
        debug!(path = %self.path.display(), count = records.len(), "Read listing snapshot");
        Ok(records)
    }
}
