//! Remote file record as returned by the listing service.

use serde::{Deserialize, Serialize};

use super::id::RemoteFileId;

/// One file or folder in the cloud storage account.
///
/// The serialized shape follows the Drive v3 `File` resource so a raw API
/// page can be deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFileRecord {
    /// Remote identifier.
    pub id: RemoteFileId,
    /// Display name.
    pub name: String,
    /// File extension without the dot.
    #[serde(default, rename = "fileExtension", alias = "extension")]
    pub extension: Option<String>,
    /// Resource kind reported by the API (e.g. `drive#file`).
    #[serde(default)]
    pub kind: Option<String>,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Parent folder ids. Only the first one is followed.
    #[serde(default, rename = "parents", alias = "parentIds")]
    pub parent_ids: Vec<RemoteFileId>,
}

impl RemoteFileRecord {
    /// Create a record with no metadata and no parents.
    pub fn new(id: impl Into<RemoteFileId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extension: None,
            kind: None,
            mime_type: None,
            parent_ids: Vec::new(),
        }
    }

    /// Replace the parent ids.
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RemoteFileId>,
    {
        self.parent_ids = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Set the MIME type.
    pub fn with_mime(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// The parent the hierarchy follows, if any.
    pub fn primary_parent(&self) -> Option<&RemoteFileId> {
        self.parent_ids.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drive_file_resource() {
        let json = r#"{
            "kind": "drive#file",
            "id": "1AbC",
            "name": "Q3 report.pdf",
            "fileExtension": "pdf",
            "mimeType": "application/pdf",
            "parents": ["0Folder", "0Other"]
        }"#;

        let record: RemoteFileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "1AbC");
        assert_eq!(record.extension.as_deref(), Some("pdf"));
        assert_eq!(record.kind.as_deref(), Some("drive#file"));
        assert_eq!(record.primary_parent().map(|p| p.as_str()), Some("0Folder"));
    }

    #[test]
    fn test_missing_optional_fields() {
        let record: RemoteFileRecord =
            serde_json::from_str(r#"{"id": "root-file", "name": "notes"}"#).unwrap();
        assert!(record.parent_ids.is_empty());
        assert!(record.primary_parent().is_none());
        assert!(record.mime_type.is_none());
    }
}
