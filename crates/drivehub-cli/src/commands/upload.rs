//! Upload command: store local files and record their descriptors.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use drivehub_core::error::AppError;
use drivehub_entity::notification::Notification;
use drivehub_service::{PendingUpload, UploadReport};

use crate::context::AppContext;
use crate::output::{self, OutputFormat};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Files to upload
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Debug, Serialize, Tabled)]
struct UploadRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Descriptor")]
    descriptor: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

#[derive(Debug, Serialize)]
struct UploadOutput<'a> {
    files: &'a [UploadRow],
    notifications: &'a [Notification],
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    ctx: &AppContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let report = upload_paths(ctx, &args.paths).await;
    let rows = rows(&report);

    match format {
        OutputFormat::Json => output::print_json(&UploadOutput {
            files: &rows,
            notifications: &report.notifications,
        }),
        OutputFormat::Table => {
            output::print_list(&rows, format);
            output::print_notifications(&report.notifications);
        }
    }

    if report.is_complete() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{} of {} uploads failed",
            report.failed.len(),
            report.failed.len() + report.uploaded.len()
        )))
    }
}

/// Upload the given paths. A path that does not name a file becomes a
/// failure row instead of aborting the batch.
async fn upload_paths(ctx: &AppContext, paths: &[PathBuf]) -> UploadReport {
    let mut batch = Vec::with_capacity(paths.len());
    let mut rejected = Vec::new();
    for path in paths {
        match PendingUpload::from_path(path) {
            Ok(pending) => batch.push(pending),
            Err(e) => rejected.push((path.display().to_string(), e)),
        }
    }

    let mut report = ctx.upload_service().upload(batch).await;
    for (name, error) in rejected {
        report.record_failure(name, error);
    }
    report
}

fn rows(report: &UploadReport) -> Vec<UploadRow> {
    let ok = report.uploaded.iter().map(|d| UploadRow {
        name: d.name.clone(),
        status: "uploaded".to_string(),
        descriptor: d.id.to_string(),
        detail: format!("{} bytes at {}", d.size_bytes, d.storage_path),
    });
    let failed = report.failed.iter().map(|f| UploadRow {
        name: f.name.clone(),
        status: "failed".to_string(),
        descriptor: "-".to_string(),
        detail: f.error.message.clone(),
    });
    ok.chain(failed).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use drivehub_core::config::AppConfig;
    use drivehub_core::error::ErrorKind;
    use drivehub_entity::notification::NotificationKind;

    async fn context(dir: &Path) -> AppContext {
        let mut config = AppConfig::default();
        config.storage.root_path = dir.join("store").to_string_lossy().into_owned();
        config.remote.snapshot_path = dir.join("none.json").to_string_lossy().into_owned();
        AppContext::new(config).await.unwrap()
    }

    #[tokio::test]
    async fn test_bad_path_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path()).await;
        let valid = dir.path().join("notes.txt");
        std::fs::write(&valid, b"meeting notes").unwrap();

        let report = upload_paths(&ctx, &[valid, PathBuf::from("..")]).await;

        assert_eq!(report.uploaded.len(), 1);
        assert_eq!(report.uploaded[0].name, "notes.txt");
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "..");
        assert_eq!(report.failed[0].error.kind, ErrorKind::Validation);

        let kinds: Vec<_> = report.notifications.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Humanized, NotificationKind::Error]);

        let rows = rows(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].status, "failed");
    }

    #[tokio::test]
    async fn test_only_bad_paths() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path()).await;

        let report = upload_paths(&ctx, &[PathBuf::from("/")]).await;

        assert!(report.uploaded.is_empty());
        assert!(!report.is_complete());
        assert_eq!(report.notifications.len(), 1);
        assert_eq!(report.notifications[0].kind, NotificationKind::Error);
    }
}
