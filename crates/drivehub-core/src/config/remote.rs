//! Remote listing source configuration.

use serde::{Deserialize, Serialize};

/// Which listing source feeds the file tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A JSON snapshot of the listing on disk.
    #[default]
    Snapshot,
    /// The Drive v3 REST API.
    Drive,
}

/// Settings for the remote file listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Listing source to use.
    #[serde(default)]
    pub source: SourceKind,
    /// Path of the JSON snapshot read by the `snapshot` source.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Base URL of the Drive API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Pre-issued OAuth bearer token for the `drive` source.
    #[serde(default)]
    pub access_token: String,
    /// Page size requested from the Drive API.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            snapshot_path: default_snapshot_path(),
            api_base: default_api_base(),
            access_token: String::new(),
            page_size: default_page_size(),
        }
    }
}

fn default_snapshot_path() -> String {
    "./data/listing.json".to_string()
}

fn default_api_base() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}

fn default_page_size() -> u32 {
    1000
}
