//! Preview and icon settings for the display layer.

use serde::{Deserialize, Serialize};

/// Embedded viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// URL template; `{id}` is replaced by the remote file id.
    #[serde(default = "default_url_template")]
    pub url_template: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
        }
    }
}

/// Icon resource configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    /// Directory the icon files live under.
    #[serde(default = "default_icon_base")]
    pub base_path: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            base_path: default_icon_base(),
        }
    }
}

fn default_url_template() -> String {
    "https://drive.google.com/file/d/{id}/preview".to_string()
}

fn default_icon_base() -> String {
    "icons".to_string()
}
