//! Uploaded file management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use drivehub_core::error::AppError;
use drivehub_core::traits::repository::Repository;
use drivehub_core::types::DescriptorId;
use drivehub_entity::descriptor::FileDescriptor;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for uploads commands
#[derive(Debug, Args)]
pub struct UploadsArgs {
    /// Uploads subcommand
    #[command(subcommand)]
    pub command: UploadsCommand,
}

/// Uploads subcommands
#[derive(Debug, Subcommand)]
pub enum UploadsCommand {
    /// List uploaded files
    List,
    /// Remove an uploaded file and its stored content
    Remove {
        /// Descriptor ID
        id: String,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct DescriptorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size")]
    size_bytes: u64,
    #[tabled(rename = "MIME Type")]
    mime_type: String,
    #[tabled(rename = "Path")]
    storage_path: String,
    #[tabled(rename = "Uploaded")]
    created_at: String,
}

impl From<&FileDescriptor> for DescriptorRow {
    fn from(d: &FileDescriptor) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.clone(),
            size_bytes: d.size_bytes,
            mime_type: d.mime_type.clone().unwrap_or_else(|| "-".to_string()),
            storage_path: d.storage_path.clone(),
            created_at: d.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Execute uploads commands
pub async fn execute(
    args: &UploadsArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        UploadsCommand::List => {
            let descriptors = ctx.descriptors.find_all().await?;
            let rows: Vec<DescriptorRow> = descriptors.iter().map(DescriptorRow::from).collect();
            output::print_list(&rows, format);
        }
        UploadsCommand::Remove { id } => {
            let id: DescriptorId = id
                .parse()
                .map_err(|e| AppError::validation(format!("Invalid descriptor ID: {e}")))?;
            let descriptor = ctx
                .descriptors
                .find_by_id(&id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Upload {id} not found")))?;

            ctx.descriptors.delete(&id).await?;
            ctx.storage.delete(&descriptor.storage_path).await?;
            output::print_success(&format!("Removed '{}' ({id})", descriptor.name));
        }
    }

    Ok(())
}
