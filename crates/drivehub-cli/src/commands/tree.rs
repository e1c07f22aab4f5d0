//! Tree command: print the reconstructed hierarchy.

use clap::Args;
use serde::Serialize;

use drivehub_core::error::AppError;
use drivehub_entity::notification::Notification;

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Show the icon resource next to each entry
    #[arg(long)]
    pub icons: bool,
}

/// One line of the printed tree
#[derive(Debug, Serialize)]
struct TreeLine {
    depth: usize,
    id: String,
    name: String,
    parent: Option<String>,
    mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
}

#[derive(Debug, Serialize)]
struct TreeOutput<'a> {
    nodes: Vec<TreeLine>,
    broken_cycles: Vec<&'a str>,
    notifications: &'a [Notification],
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let screen = ctx.screen()?;
    let state = screen.open().await;

    let lines: Vec<TreeLine> = state
        .tree
        .walk()
        .into_iter()
        .map(|(depth, node)| TreeLine {
            depth,
            id: node.id.to_string(),
            name: node.name.clone(),
            parent: node.parent.as_ref().map(|p| p.to_string()),
            mime_type: node.mime_type.clone(),
            icon: if args.icons { screen.icon_for(node) } else { None },
        })
        .collect();

    match format {
        OutputFormat::Json => output::print_json(&TreeOutput {
            nodes: lines,
            broken_cycles: state.tree.broken_cycles().iter().map(|id| id.as_str()).collect(),
            notifications: &state.notifications,
        }),
        OutputFormat::Table => {
            output::print_notifications(&state.notifications);
            if lines.is_empty() {
                println!("No files.");
            }
            for line in &lines {
                let indent = "  ".repeat(line.depth);
                match &line.icon {
                    Some(icon) => println!("{indent}{} ({}) [{icon}]", line.name, line.id),
                    None => println!("{indent}{} ({})", line.name, line.id),
                }
            }
        }
    }

    Ok(())
}
