//! Platform file storage configuration.

use serde::{Deserialize, Serialize};

/// Storage settings for uploaded files and their descriptors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root path for local file storage.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Path of the descriptor index, relative to `root_path`.
    #[serde(default = "default_descriptor_index")]
    pub descriptor_index: String,
    /// Maximum upload size in bytes (default 100 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            descriptor_index: default_descriptor_index(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_root_path() -> String {
    "./data/storage".to_string()
}

fn default_descriptor_index() -> String {
    "_descriptors/index.json".to_string()
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MB
}
