//! In-memory listing source.

use async_trait::async_trait;

use drivehub_core::result::AppResult;
use drivehub_entity::remote::RemoteFileRecord;

use crate::source::RemoteFileSource;

/// Serves a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RemoteFileRecord>,
}

impl StaticSource {
    /// Create a source that always returns `records`.
    pub fn new(records: Vec<RemoteFileRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RemoteFileSource for StaticSource {
    fn source_type(&self) -> &str {
        "static"
    }

    async fn list_files(&self) -> AppResult<Vec<RemoteFileRecord>> {
        Ok(self.records.clone())
    }
}
