//! Upload service: size check, storage write, descriptor commit.

use std::sync::Arc;

use tokio::fs;
use tokio::io::AsyncReadExt;
use tokio_util::io::ReaderStream;
use tracing::{info, warn};

use drivehub_core::error::{AppError, ErrorKind};
use drivehub_core::result::AppResult;
use drivehub_core::traits::repository::Repository;
use drivehub_core::traits::storage::StorageProvider;
use drivehub_core::types::DescriptorId;
use drivehub_entity::descriptor::FileDescriptor;
use drivehub_entity::notification::Notification;

use super::pending::{PendingUpload, UploadContent};

/// A file that could not be uploaded.
#[derive(Debug, Clone)]
pub struct UploadFailure {
    /// Original file name.
    pub name: String,
    /// Cause.
    pub error: AppError,
}

/// Outcome of one upload batch.
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    /// Committed descriptors, in request order.
    pub uploaded: Vec<FileDescriptor>,
    /// Per-file failures, in request order.
    pub failed: Vec<UploadFailure>,
    /// Messages for the operator.
    pub notifications: Vec<Notification>,
}

impl UploadReport {
    /// Whether every file in the batch was committed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Record a file that could not be uploaded, with its error notification.
    pub fn record_failure(&mut self, name: impl Into<String>, error: AppError) {
        let name = name.into();
        warn!(file = %name, error = %error, "File upload failed");
        self.notifications.push(Notification::error(format!(
            "File upload error: {name}: {}",
            error.message
        )));
        self.failed.push(UploadFailure { name, error });
    }
}

/// Stores uploaded files and records their descriptors.
///
/// A failing file never aborts the rest of the batch, and never leaves an
/// object in storage without a descriptor.
pub struct UploadService {
    storage: Arc<dyn StorageProvider>,
    descriptors: Arc<dyn Repository<FileDescriptor, DescriptorId>>,
    max_upload_size_bytes: u64,
}

impl std::fmt::Debug for UploadService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadService")
            .field("storage", &self.storage.provider_type())
            .field("max_upload_size_bytes", &self.max_upload_size_bytes)
            .finish()
    }
}

impl UploadService {
    /// Create a new upload service.
    pub fn new(
        storage: Arc<dyn StorageProvider>,
        descriptors: Arc<dyn Repository<FileDescriptor, DescriptorId>>,
        max_upload_size_bytes: u64,
    ) -> Self {
        Self {
            storage,
            descriptors,
            max_upload_size_bytes,
        }
    }

    /// Upload every file in `batch`.
    pub async fn upload(&self, batch: Vec<PendingUpload>) -> UploadReport {
        let mut report = UploadReport::default();

        for pending in batch {
            let name = pending.name.clone();
            match self.upload_one(pending).await {
                Ok(descriptor) => report.uploaded.push(descriptor),
                Err(error) => report.record_failure(name, error),
            }
        }

        if !report.uploaded.is_empty() {
            let names: Vec<&str> = report.uploaded.iter().map(|d| d.name.as_str()).collect();
            let message = format!("Uploaded files: [{}]", names.join(", "));
            report.notifications.insert(0, Notification::humanized(message));
        }

        info!(
            uploaded = report.uploaded.len(),
            failed = report.failed.len(),
            "Upload batch finished"
        );
        report
    }

    async fn upload_one(&self, pending: PendingUpload) -> AppResult<FileDescriptor> {
        if pending.name.trim().is_empty() {
            return Err(AppError::validation("File name is empty"));
        }

        let size = match &pending.content {
            UploadContent::Bytes(data) => data.len() as u64,
            UploadContent::File(path) => fs::metadata(path)
                .await
                .map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        AppError::not_found(format!("File not found: {}", path.display()))
                    } else {
                        AppError::with_source(
                            ErrorKind::Storage,
                            format!("Failed to read file metadata: {}", path.display()),
                            e,
                        )
                    }
                })?
                .len(),
        };
        self.check_size(size)?;

        let mime_type = mime_guess::from_path(&pending.name)
            .first()
            .map(|m| m.to_string());
        let mut descriptor = FileDescriptor::new(&pending.name, mime_type, size);

        descriptor.size_bytes = match self.store(&descriptor.storage_path, pending.content).await {
            Ok(written) => written,
            Err(e) => {
                self.discard(&descriptor.storage_path).await;
                return Err(e);
            }
        };

        if let Err(e) = self.descriptors.create(&descriptor).await {
            self.discard(&descriptor.storage_path).await;
            return Err(e);
        }

        info!(
            upload_id = %pending.id,
            descriptor_id = %descriptor.id,
            name = %descriptor.name,
            size = descriptor.size_bytes,
            path = %descriptor.storage_path,
            "Stored uploaded file"
        );
        Ok(descriptor)
    }

    fn check_size(&self, size: u64) -> AppResult<()> {
        if size > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File is {size} bytes, limit is {} bytes",
                self.max_upload_size_bytes
            )));
        }
        Ok(())
    }

    /// Write the content and return the number of bytes stored.
    ///
    /// File content is read through a cap one byte past the limit, so a
    /// file that grew after the size check is still rejected.
    async fn store(&self, path: &str, content: UploadContent) -> AppResult<u64> {
        match content {
            UploadContent::Bytes(data) => {
                let len = data.len() as u64;
                self.storage.write(path, data).await?;
                Ok(len)
            }
            UploadContent::File(source) => {
                let file = fs::File::open(&source).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to open file: {}", source.display()),
                        e,
                    )
                })?;
                let capped = file.take(self.max_upload_size_bytes.saturating_add(1));
                let written = self
                    .storage
                    .write_stream(path, Box::pin(ReaderStream::new(capped)))
                    .await?;
                self.check_size(written)?;
                Ok(written)
            }
        }
    }

    /// Remove a partially or fully written object that will not be committed.
    async fn discard(&self, path: &str) {
        if let Err(e) = self.storage.delete(path).await {
            warn!(path, error = %e, "Failed to remove orphaned upload");
        }
    }
}
