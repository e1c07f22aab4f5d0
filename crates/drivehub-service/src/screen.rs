//! The drive screen: tree, selection, and uploads behind one handle.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

use drivehub_core::error::AppError;
use drivehub_core::result::AppResult;
use drivehub_entity::notification::Notification;
use drivehub_entity::remote::RemoteFileId;
use drivehub_entity::tree::{FileTree, TreeNode};

use crate::display::{IconCatalog, PreviewService};
use crate::tree::TreeService;
use crate::upload::{PendingUpload, UploadReport, UploadService};

/// What the screen shows after opening.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    /// The reconstructed tree; empty when the listing failed.
    pub tree: FileTree,
    /// Messages raised while opening.
    pub notifications: Vec<Notification>,
}

/// The result of selecting a tree node.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected node.
    pub node: TreeNode,
    /// Embedded-viewer locator, absent when the id is not previewable.
    pub preview: Option<Url>,
    /// Icon path for the node's MIME type.
    pub icon: Option<String>,
    /// Error raised while building the preview.
    pub notification: Option<Notification>,
}

/// Screen controller. Upload results never modify the loaded tree.
#[derive(Debug)]
pub struct DriveScreen {
    trees: TreeService,
    previews: PreviewService,
    icons: IconCatalog,
    uploads: Arc<UploadService>,
    tree: RwLock<FileTree>,
}

impl DriveScreen {
    /// Create a new screen.
    pub fn new(
        trees: TreeService,
        previews: PreviewService,
        icons: IconCatalog,
        uploads: Arc<UploadService>,
    ) -> Self {
        Self {
            trees,
            previews,
            icons,
            uploads,
            tree: RwLock::new(FileTree::empty()),
        }
    }

    /// Load the tree. Listing failures degrade to an empty tree.
    pub async fn open(&self) -> ScreenState {
        let mut notifications = Vec::new();
        let tree = match self.trees.load().await {
            Ok(tree) => {
                if !tree.broken_cycles().is_empty() {
                    notifications.push(Notification::warning(format!(
                        "Parent cycles were cut at: {}",
                        tree.broken_cycles()
                            .iter()
                            .map(|id| id.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )));
                }
                tree
            }
            Err(e) => {
                warn!(error = %e, "Failed to load the file tree");
                notifications.push(Notification::warning(format!(
                    "Could not load files: {}",
                    e.message
                )));
                FileTree::empty()
            }
        };

        *self.tree.write().await = tree.clone();
        ScreenState {
            tree,
            notifications,
        }
    }

    /// The currently loaded tree.
    pub async fn tree(&self) -> FileTree {
        self.tree.read().await.clone()
    }

    /// Select a node by id.
    pub async fn select(&self, id: &RemoteFileId) -> AppResult<Selection> {
        let node = self
            .tree
            .read()
            .await
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("File {id} is not in the tree")))?;

        let (preview, notification) = match self.previews.preview_url(id) {
            Ok(url) => (Some(url), None),
            Err(e) => {
                debug!(id = %id, error = %e, "No preview for selection");
                (None, Some(Notification::error(e.message)))
            }
        };

        Ok(Selection {
            icon: self.icon_for(&node),
            node,
            preview,
            notification,
        })
    }

    /// Icon path for a node.
    pub fn icon_for(&self, node: &TreeNode) -> Option<String> {
        self.icons.icon_for(node.mime_type.as_deref())
    }

    /// Upload a batch of files.
    pub async fn upload(&self, batch: Vec<PendingUpload>) -> UploadReport {
        self.uploads.upload(batch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use drivehub_core::config::{IconConfig, PreviewConfig};
    use drivehub_core::error::ErrorKind;
    use drivehub_core::traits::storage::StorageProvider;
    use drivehub_entity::notification::NotificationKind;
    use drivehub_entity::remote::RemoteFileRecord;
    use drivehub_remote::{RemoteFileSource, StaticSource};
    use drivehub_storage::{JsonDescriptorRepository, LocalStorageProvider};

    use crate::tree::TreeBuilder;

    #[derive(Debug)]
    struct FailingSource;

    #[async_trait]
    impl RemoteFileSource for FailingSource {
        fn source_type(&self) -> &str {
            "failing"
        }

        async fn list_files(&self) -> AppResult<Vec<RemoteFileRecord>> {
            Err(AppError::external_service("listing unavailable"))
        }
    }

    async fn screen(source: Arc<dyn RemoteFileSource>, dir: &tempfile::TempDir) -> DriveScreen {
        let storage: Arc<dyn StorageProvider> = Arc::new(
            LocalStorageProvider::new(dir.path().to_str().unwrap())
                .await
                .unwrap(),
        );
        let repo = JsonDescriptorRepository::open(storage.clone(), "_descriptors/index.json")
            .await
            .unwrap();
        DriveScreen::new(
            TreeService::new(source, TreeBuilder::default()),
            PreviewService::new(&PreviewConfig::default()).unwrap(),
            IconCatalog::new(&IconConfig::default()),
            Arc::new(UploadService::new(storage, Arc::new(repo), 1024)),
        )
    }

    fn listing() -> Arc<dyn RemoteFileSource> {
        Arc::new(StaticSource::new(vec![
            RemoteFileRecord::new("doc1", "plan")
                .with_mime("application/vnd.google-apps.document")
                .with_parents(["folder1"]),
            RemoteFileRecord::new("folder1", "Work").with_mime("application/vnd.google-apps.folder"),
            RemoteFileRecord::new("bad.id", "odd"),
        ]))
    }

    #[tokio::test]
    async fn test_open_and_select() {
        let dir = tempfile::tempdir().unwrap();
        let screen = screen(listing(), &dir).await;

        let state = screen.open().await;
        assert_eq!(state.tree.len(), 3);
        assert!(state.notifications.is_empty());

        let selection = screen.select(&RemoteFileId::from("doc1")).await.unwrap();
        assert_eq!(selection.node.parent.as_ref().map(|p| p.as_str()), Some("folder1"));
        assert_eq!(selection.icon.as_deref(), Some("icons/doc.png"));
        assert_eq!(
            selection.preview.map(|u| u.to_string()).as_deref(),
            Some("https://drive.google.com/file/d/doc1/preview")
        );
        assert!(selection.notification.is_none());
    }

    #[tokio::test]
    async fn test_malformed_id_yields_notification() {
        let dir = tempfile::tempdir().unwrap();
        let screen = screen(listing(), &dir).await;
        screen.open().await;

        let selection = screen.select(&RemoteFileId::from("bad.id")).await.unwrap();
        assert!(selection.preview.is_none());
        assert_eq!(selection.icon, None);
        assert_eq!(
            selection.notification.map(|n| n.kind),
            Some(NotificationKind::Error)
        );
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let screen = screen(listing(), &dir).await;
        screen.open().await;

        let err = screen.select(&RemoteFileId::from("nope")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_listing_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let screen = screen(Arc::new(FailingSource), &dir).await;

        let state = screen.open().await;
        assert!(state.tree.is_empty());
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].kind, NotificationKind::Warning);
    }

    #[tokio::test]
    async fn test_upload_leaves_tree_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let screen = screen(listing(), &dir).await;
        let before = screen.open().await.tree;

        let report = screen
            .upload(vec![PendingUpload::from_bytes("notes.txt", "hi")])
            .await;
        assert_eq!(report.uploaded.len(), 1);
        assert_eq!(screen.tree().await, before);
    }
}
