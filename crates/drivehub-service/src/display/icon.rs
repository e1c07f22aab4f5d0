//! MIME-to-icon lookup.

use drivehub_core::config::IconConfig;
use drivehub_entity::mime::MimeKind;

/// Resolves icon resource paths for the four MIME kinds with icons.
#[derive(Debug, Clone)]
pub struct IconCatalog {
    base_path: String,
}

impl IconCatalog {
    /// Create a catalog rooted at the configured icon directory.
    pub fn new(config: &IconConfig) -> Self {
        Self {
            base_path: config.base_path.trim_end_matches('/').to_string(),
        }
    }

    /// Icon path for a MIME type; `None` when the type has no icon.
    pub fn icon_for(&self, mime_type: Option<&str>) -> Option<String> {
        let kind = MimeKind::from_mime(mime_type)?;
        Some(self.path_of(kind))
    }

    /// Icon path for a known kind.
    pub fn path_of(&self, kind: MimeKind) -> String {
        if self.base_path.is_empty() {
            kind.icon_file().to_string()
        } else {
            format!("{}/{}", self.base_path, kind.icon_file())
        }
    }
}

impl Default for IconCatalog {
    fn default() -> Self {
        Self::new(&IconConfig::default())
    }
}
