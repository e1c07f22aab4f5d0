//! Builds services from the loaded configuration.

use std::sync::Arc;

use tracing::debug;

use drivehub_core::config::{AppConfig, SourceKind};
use drivehub_core::result::AppResult;
use drivehub_core::traits::storage::StorageProvider;
use drivehub_remote::{RemoteFileSource, SnapshotSource};
use drivehub_service::{
    DriveScreen, IconCatalog, PreviewService, TreeBuilder, TreeService, UploadService,
};
use drivehub_storage::{JsonDescriptorRepository, LocalStorageProvider};

/// Services shared by the commands.
#[derive(Debug)]
pub struct AppContext {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Platform storage.
    pub storage: Arc<dyn StorageProvider>,
    /// Descriptor index.
    pub descriptors: Arc<JsonDescriptorRepository>,
}

impl AppContext {
    /// Open storage and the descriptor index.
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let storage: Arc<dyn StorageProvider> =
            Arc::new(LocalStorageProvider::new(&config.storage.root_path).await?);
        let descriptors = Arc::new(
            JsonDescriptorRepository::open(storage.clone(), &config.storage.descriptor_index)
                .await?,
        );
        debug!(
            root = %config.storage.root_path,
            index = %config.storage.descriptor_index,
            "Opened platform storage"
        );
        Ok(Self {
            config,
            storage,
            descriptors,
        })
    }

    /// Upload service over this context's storage.
    pub fn upload_service(&self) -> Arc<UploadService> {
        Arc::new(UploadService::new(
            self.storage.clone(),
            self.descriptors.clone(),
            self.config.storage.max_upload_size_bytes,
        ))
    }

    /// Wire the drive screen.
    pub fn screen(&self) -> AppResult<DriveScreen> {
        let source = build_source(&self.config)?;
        Ok(DriveScreen::new(
            TreeService::new(source, TreeBuilder::new(self.config.tree.cycle_policy)),
            PreviewService::new(&self.config.preview)?,
            IconCatalog::new(&self.config.icons),
            self.upload_service(),
        ))
    }
}

/// Listing source selected by `remote.source`.
pub fn build_source(config: &AppConfig) -> AppResult<Arc<dyn RemoteFileSource>> {
    match config.remote.source {
        SourceKind::Snapshot => Ok(Arc::new(SnapshotSource::new(&config.remote.snapshot_path))),
        SourceKind::Drive => drive_source(config),
    }
}

#[cfg(feature = "drive-api")]
fn drive_source(config: &AppConfig) -> AppResult<Arc<dyn RemoteFileSource>> {
    Ok(Arc::new(drivehub_remote::DriveApiSource::new(&config.remote)?))
}

#[cfg(not(feature = "drive-api"))]
fn drive_source(_config: &AppConfig) -> AppResult<Arc<dyn RemoteFileSource>> {
    Err(drivehub_core::error::AppError::configuration(
        "remote.source = \"drive\" requires building with the drive-api feature",
    ))
}
