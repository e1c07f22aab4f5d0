//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use drivehub_cli::context::AppContext;
use drivehub_core::config::{AppConfig, CyclePolicy};
use drivehub_service::DriveScreen;

/// A listing shaped like a Drive `files.list` page.
pub const DRIVE_PAGE: &str = r#"{
    "files": [
        {"kind": "drive#file", "id": "sheet1", "name": "Budget", "mimeType": "application/vnd.google-apps.spreadsheet", "parents": ["team"]},
        {"kind": "drive#file", "id": "team", "name": "Team", "mimeType": "application/vnd.google-apps.folder", "parents": ["root"]},
        {"kind": "drive#file", "id": "root", "name": "My Drive", "mimeType": "application/vnd.google-apps.folder"},
        {"kind": "drive#file", "id": "design", "name": "Design.pdf", "fileExtension": "pdf", "mimeType": "application/pdf", "parents": ["team", "root"]},
        {"kind": "drive#file", "id": "orphan", "name": "notes.txt", "mimeType": "text/plain", "parents": ["gone"]},
        {"kind": "drive#file", "id": "team", "name": "Team (dup)", "mimeType": "application/vnd.google-apps.folder"}
    ]
}"#;

/// Test application context backed by a temporary directory.
pub struct TestApp {
    /// Keeps the directory alive for the test's duration
    pub dir: TempDir,
    /// Services built from `config`
    pub ctx: AppContext,
}

impl TestApp {
    /// Create an app whose snapshot file holds `listing`.
    pub async fn with_listing(listing: &str) -> Self {
        Self::build(Some(listing), CyclePolicy::Break, 1024 * 1024).await
    }

    /// Create an app with no snapshot file at all.
    pub async fn without_listing() -> Self {
        Self::build(None, CyclePolicy::Break, 1024 * 1024).await
    }

    /// Create an app with full control over the knobs tests care about.
    pub async fn build(listing: Option<&str>, policy: CyclePolicy, max_upload: u64) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let snapshot = dir.path().join("listing.json");
        if let Some(listing) = listing {
            std::fs::write(&snapshot, listing).expect("Failed to write snapshot");
        }

        let mut config = AppConfig::default();
        config.remote.snapshot_path = snapshot.to_string_lossy().into_owned();
        config.storage.root_path = dir.path().join("storage").to_string_lossy().into_owned();
        config.storage.max_upload_size_bytes = max_upload;
        config.tree.cycle_policy = policy;

        let ctx = AppContext::new(config)
            .await
            .expect("Failed to open app context");
        Self { dir, ctx }
    }

    /// Wire a fresh drive screen.
    pub fn screen(&self) -> DriveScreen {
        self.ctx.screen().expect("Failed to build screen")
    }

    /// Write a local file to upload and return its path.
    pub fn local_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let dir = self.dir.path().join("local");
        std::fs::create_dir_all(&dir).expect("Failed to create local dir");
        let path = dir.join(name);
        std::fs::write(&path, content).expect("Failed to write local file");
        path
    }
}
