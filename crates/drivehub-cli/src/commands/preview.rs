//! Preview command: select a file and print its viewer locator.

use clap::Args;
use serde::Serialize;

use drivehub_core::error::AppError;
use drivehub_entity::remote::RemoteFileId;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for the preview command
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Remote file id
    pub id: String,
}

#[derive(Debug, Serialize)]
struct PreviewOutput {
    id: String,
    name: String,
    preview: Option<String>,
    icon: Option<String>,
    error: Option<String>,
}

/// Execute the preview command
pub async fn execute(
    args: &PreviewArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let screen = ctx.screen()?;
    let state = screen.open().await;
    let selection = screen.select(&RemoteFileId::from(args.id.as_str())).await?;

    match format {
        OutputFormat::Json => output::print_json(&PreviewOutput {
            id: selection.node.id.to_string(),
            name: selection.node.name.clone(),
            preview: selection.preview.as_ref().map(|u| u.to_string()),
            icon: selection.icon.clone(),
            error: selection.notification.as_ref().map(|n| n.message.clone()),
        }),
        OutputFormat::Table => {
            output::print_notifications(&state.notifications);
            output::print_kv("Name", &selection.node.name);
            output::print_kv("ID", selection.node.id.as_str());
            if let Some(icon) = &selection.icon {
                output::print_kv("Icon", icon);
            }
            match (&selection.preview, &selection.notification) {
                (Some(url), _) => output::print_kv("Preview", url.as_str()),
                (None, Some(n)) => output::print_error(&n.message),
                (None, None) => output::print_kv("Preview", "-"),
            }
        }
    }

    Ok(())
}
