//! A materialized, parent-linked remote file.

use serde::{Deserialize, Serialize};

use crate::mime::MimeKind;
use crate::remote::{RemoteFileId, RemoteFileRecord};

/// A node in a [`FileTree`](super::FileTree).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Remote identifier.
    pub id: RemoteFileId,
    /// Display name.
    pub name: String,
    /// File extension without the dot.
    pub extension: Option<String>,
    /// Resource kind reported by the API.
    pub kind: Option<String>,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Parent ids as listed, including ignored secondary parents.
    pub parent_ids: Vec<RemoteFileId>,
    /// Resolved parent, always a node of the same tree.
    pub parent: Option<RemoteFileId>,
}

impl TreeNode {
    /// Copy a record into a node with the given resolved parent.
    pub fn from_record(record: &RemoteFileRecord, parent: Option<RemoteFileId>) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            extension: record.extension.clone(),
            kind: record.kind.clone(),
            mime_type: record.mime_type.clone(),
            parent_ids: record.parent_ids.clone(),
            parent,
        }
    }

    /// Check if this is a root node (no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether the node is a folder.
    pub fn is_folder(&self) -> bool {
        self.mime_kind() == Some(MimeKind::Folder)
    }

    /// Icon classification of the node's MIME type.
    pub fn mime_kind(&self) -> Option<MimeKind> {
        MimeKind::from_mime(self.mime_type.as_deref())
    }
}
