//! File descriptor repository backed by a JSON index in platform storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;
use tracing::{debug, info};

use drivehub_core::error::{AppError, ErrorKind};
use drivehub_core::result::AppResult;
use drivehub_core::traits::repository::Repository;
use drivehub_core::traits::storage::StorageProvider;
use drivehub_core::types::DescriptorId;
use drivehub_entity::descriptor::FileDescriptor;

/// Keeps every committed [`FileDescriptor`] in one JSON document.
///
/// The whole index is rewritten on each change; an insert whose index
/// write fails is rolled back in memory.
#[derive(Debug)]
pub struct JsonDescriptorRepository {
    /// Storage holding the index document.
    provider: Arc<dyn StorageProvider>,
    /// Path of the index within the provider.
    index_path: String,
    /// In-memory copy of the index.
    entries: RwLock<BTreeMap<DescriptorId, FileDescriptor>>,
}

impl JsonDescriptorRepository {
    /// Open the repository, loading an existing index if there is one.
    pub async fn open(provider: Arc<dyn StorageProvider>, index_path: &str) -> AppResult<Self> {
        let entries = match provider.read_bytes(index_path).await {
            Ok(raw) => {
                let list: Vec<FileDescriptor> = serde_json::from_slice(&raw)?;
                list.into_iter().map(|d| (d.id, d)).collect()
            }
            Err(e) if e.kind == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };

        info!(
            index = index_path,
            count = entries.len(),
            "Opened descriptor index"
        );

        Ok(Self {
            provider,
            index_path: index_path.to_string(),
            entries: RwLock::new(entries),
        })
    }

    async fn persist(&self, entries: &BTreeMap<DescriptorId, FileDescriptor>) -> AppResult<()> {
        let mut list: Vec<&FileDescriptor> = entries.values().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let json = serde_json::to_vec_pretty(&list)?;
        self.provider
            .write(&self.index_path, Bytes::from(json))
            .await
    }
}

#[async_trait]
impl Repository<FileDescriptor, DescriptorId> for JsonDescriptorRepository {
    async fn find_by_id(&self, id: &DescriptorId) -> AppResult<Option<FileDescriptor>> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<FileDescriptor>> {
        let entries = self.entries.read().await;
        let mut list: Vec<FileDescriptor> = entries.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(list)
    }

    async fn create(&self, entity: &FileDescriptor) -> AppResult<FileDescriptor> {
        let mut entries = self.entries.write().await;
        if entries.contains_key(&entity.id) {
            return Err(AppError::validation(format!(
                "Descriptor {} already exists",
                entity.id
            )));
        }

        entries.insert(entity.id, entity.clone());
        if let Err(e) = self.persist(&entries).await {
            entries.remove(&entity.id);
            return Err(e);
        }

        debug!(id = %entity.id, name = %entity.name, "Committed descriptor");
        Ok(entity.clone())
    }

    async fn delete(&self, id: &DescriptorId) -> AppResult<bool> {
        let mut entries = self.entries.write().await;
        let Some(removed) = entries.remove(id) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&entries).await {
            entries.insert(*id, removed);
            return Err(e);
        }
        Ok(true)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.entries.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::LocalStorageProvider;

    const INDEX: &str = "_descriptors/index.json";

    async fn provider(dir: &tempfile::TempDir) -> Arc<dyn StorageProvider> {
        Arc::new(
            LocalStorageProvider::new(dir.path().to_str().unwrap())
                .await
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_create_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let storage = provider(&dir).await;

        let repo = JsonDescriptorRepository::open(storage.clone(), INDEX)
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);

        let descriptor = FileDescriptor::new("notes.txt", Some("text/plain".into()), 5);
        repo.create(&descriptor).await.unwrap();

        let reopened = JsonDescriptorRepository::open(storage, INDEX).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
        let found = reopened.find_by_id(&descriptor.id).await.unwrap();
        assert_eq!(found, Some(descriptor));
    }

    #[tokio::test]
    async fn test_duplicate_create_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonDescriptorRepository::open(provider(&dir).await, INDEX)
            .await
            .unwrap();

        let descriptor = FileDescriptor::new("a.pdf", None, 1);
        repo.create(&descriptor).await.unwrap();
        let err = repo.create(&descriptor).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonDescriptorRepository::open(provider(&dir).await, INDEX)
            .await
            .unwrap();

        let descriptor = FileDescriptor::new("a.pdf", None, 1);
        repo.create(&descriptor).await.unwrap();
        assert!(repo.delete(&descriptor.id).await.unwrap());
        assert!(!repo.delete(&descriptor.id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_index_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let storage = provider(&dir).await;
        storage
            .write(INDEX, Bytes::from_static(b"not json"))
            .await
            .unwrap();

        let err = JsonDescriptorRepository::open(storage, INDEX)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
