//! Opaque identifier assigned by the cloud storage account.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a remote file or folder.
///
/// Drive ids are opaque strings, not UUIDs, so this wraps a `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteFileId(String);

impl RemoteFileId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteFileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RemoteFileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RemoteFileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for RemoteFileId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
