//! Listing source trait.

use async_trait::async_trait;

use drivehub_core::result::AppResult;
use drivehub_entity::remote::RemoteFileRecord;

/// Supplies the flat list of files and folders in the cloud account.
///
/// An empty listing is a valid, quiescent state and is returned as an
/// empty vector rather than an error.
#[async_trait]
pub trait RemoteFileSource: Send + Sync + std::fmt::Debug + 'static {
    /// Short name of the source for logs (e.g. "snapshot").
    fn source_type(&self) -> &str;

    /// Fetch every record visible to the account.
    async fn list_files(&self) -> AppResult<Vec<RemoteFileRecord>>;
}
