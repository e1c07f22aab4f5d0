//! Loads the remote listing and turns it into a tree.

use std::sync::Arc;

use tracing::{debug, info};

use drivehub_core::result::AppResult;
use drivehub_entity::tree::FileTree;
use drivehub_remote::RemoteFileSource;

use super::builder::TreeBuilder;

/// Fetches the listing and builds the tree with the configured policy.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Remote listing source.
    source: Arc<dyn RemoteFileSource>,
    /// Tree builder.
    builder: TreeBuilder,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(source: Arc<dyn RemoteFileSource>, builder: TreeBuilder) -> Self {
        Self { source, builder }
    }

    /// Fetches the listing and builds the tree.
    pub async fn load(&self) -> AppResult<FileTree> {
        let records = self.source.list_files().await?;
        let tree = self.builder.run(&records)?;

        info!(
            source = self.source.source_type(),
            records = records.len(),
            nodes = tree.len(),
            "Loaded file tree"
        );
        debug!(
            roots = ?tree.roots().iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            "Tree roots"
        );

        Ok(tree)
    }
}
