//! Files command: the raw remote listing.

use serde::Serialize;
use tabled::Tabled;

use drivehub_core::config::AppConfig;
use drivehub_core::error::AppError;

use crate::context::build_source;
use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MIME Type")]
    mime_type: String,
    #[tabled(rename = "Parents")]
    parents: String,
}

/// Execute the files command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let records = build_source(config)?.list_files().await?;

    let rows: Vec<FileRow> = records
        .iter()
        .map(|r| FileRow {
            id: r.id.to_string(),
            name: r.name.clone(),
            mime_type: r.mime_type.clone().unwrap_or_else(|| "-".to_string()),
            parents: r
                .parent_ids
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
