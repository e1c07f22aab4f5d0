//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use drivehub_core::config::{AppConfig, SourceKind};
use drivehub_core::error::AppError;
use drivehub_service::PreviewService;

use crate::context::build_source;
use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = redacted(config);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => println!("{config:#?}"),
            }
        }
        ConfigCommand::Validate => match validate(&config) {
            Ok(()) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Remote source", source_name(config.remote.source));
                output::print_kv("Cycle policy", &format!("{:?}", config.tree.cycle_policy));
                output::print_kv("Preview", &config.preview.url_template);
                output::print_kv("Storage", &config.storage.root_path);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}

fn validate(config: &AppConfig) -> Result<(), AppError> {
    PreviewService::new(&config.preview)?;
    build_source(config)?;
    if config.storage.max_upload_size_bytes == 0 {
        return Err(AppError::configuration(
            "storage.max_upload_size_bytes must be greater than zero",
        ));
    }
    Ok(())
}

fn source_name(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Snapshot => "snapshot",
        SourceKind::Drive => "drive",
    }
}

/// Mask the access token for display
fn redacted(mut config: AppConfig) -> AppConfig {
    if !config.remote.access_token.is_empty() {
        config.remote.access_token = "****".to_string();
    }
    config
}
