//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so a missing file still
//! yields a usable configuration.

pub mod display;
pub mod logging;
pub mod remote;
pub mod storage;
pub mod tree;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::display::{IconConfig, PreviewConfig};
pub use self::logging::LoggingConfig;
pub use self::remote::{RemoteConfig, SourceKind};
pub use self::storage::StorageConfig;
pub use self::tree::{CyclePolicy, TreeConfig};

use crate::error::AppError;

/// Environment variable naming the overlay file under `config/`.
pub const ENV_VAR: &str = "DRIVEHUB_ENV";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote listing settings.
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Tree builder settings.
    #[serde(default)]
    pub tree: TreeConfig,
    /// Embedded viewer settings.
    #[serde(default)]
    pub preview: PreviewConfig,
    /// Icon resource settings.
    #[serde(default)]
    pub icons: IconConfig,
    /// Platform file storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the TOML file at `path`.
    ///
    /// The file is overlaid with `config/<env>.toml` when `DRIVEHUB_ENV`
    /// is set, then with environment variables prefixed `DRIVEHUB__`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let env = std::env::var(ENV_VAR).ok();
        Self::load_layered(path, env.as_deref())
    }

    /// Load configuration with an explicit environment overlay name.
    pub fn load_layered(path: &str, env: Option<&str>) -> Result<Self, AppError> {
        let mut builder =
            config::Config::builder().add_source(config::File::from(Path::new(path)).required(false));

        if let Some(env) = env {
            let overlay = format!("config/{env}.toml");
            builder = builder.add_source(config::File::from(Path::new(&overlay)).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("DRIVEHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load_layered("does/not/exist.toml", None).expect("defaults");
        assert_eq!(config.tree.cycle_policy, CyclePolicy::Break);
        assert_eq!(config.remote.source, SourceKind::Snapshot);
        assert_eq!(
            config.preview.url_template,
            "https://drive.google.com/file/d/{id}/preview"
        );
        assert_eq!(config.icons.base_path, "icons");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drivehub.toml");
        std::fs::write(
            &path,
            r#"
[tree]
cycle_policy = "reject"

[remote]
source = "drive"
page_size = 50

[storage]
max_upload_size_bytes = 1024
"#,
        )
        .unwrap();

        let config = AppConfig::load_layered(path.to_str().unwrap(), None).expect("load");
        assert_eq!(config.tree.cycle_policy, CyclePolicy::Reject);
        assert_eq!(config.remote.source, SourceKind::Drive);
        assert_eq!(config.remote.page_size, 50);
        assert_eq!(config.storage.max_upload_size_bytes, 1024);
        assert_eq!(config.storage.descriptor_index, "_descriptors/index.json");
    }

    #[test]
    fn test_invalid_policy_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[tree]\ncycle_policy = \"ignore\"\n").unwrap();

        let err = AppConfig::load_layered(path.to_str().unwrap(), None).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
