//! CLI command definitions and dispatch.

pub mod config;
pub mod files;
pub mod preview;
pub mod tree;
pub mod upload;
pub mod uploads;

use clap::{Parser, Subcommand};

use drivehub_core::config::AppConfig;
use drivehub_core::error::AppError;

use crate::context::AppContext;
use crate::output::OutputFormat;

/// DriveHub: browse a cloud drive listing and upload files
#[derive(Debug, Parser)]
#[command(name = "drivehub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the reconstructed file tree
    Tree(tree::TreeArgs),
    /// List the raw remote records
    Files,
    /// Show the preview locator for a file
    Preview(preview::PreviewArgs),
    /// Upload local files into platform storage
    Upload(upload::UploadArgs),
    /// Manage uploaded files
    Uploads(uploads::UploadsArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command against a loaded configuration
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Files => files::execute(&config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, config, self.format),
            Commands::Tree(args) => {
                let ctx = AppContext::new(config).await?;
                tree::execute(args, &ctx, self.format).await
            }
            Commands::Preview(args) => {
                let ctx = AppContext::new(config).await?;
                preview::execute(args, &ctx, self.format).await
            }
            Commands::Upload(args) => {
                let ctx = AppContext::new(config).await?;
                upload::execute(args, &ctx, self.format).await
            }
            Commands::Uploads(args) => {
                let ctx = AppContext::new(config).await?;
                uploads::execute(args, &ctx, self.format).await
            }
        }
    }
}
