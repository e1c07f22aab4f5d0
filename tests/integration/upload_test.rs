//! Integration tests for uploads through the drive screen.

mod helpers;

use drivehub_core::config::CyclePolicy;
use drivehub_core::traits::repository::Repository;
use drivehub_entity::notification::NotificationKind;
use drivehub_service::PendingUpload;

use helpers::{DRIVE_PAGE, TestApp};

#[tokio::test]
async fn test_upload_files_and_list_descriptors() {
    let app = TestApp::with_listing(DRIVE_PAGE).await;
    let screen = app.screen();
    let before = screen.open().await.tree;

    let report = screen
        .upload(vec![
            PendingUpload::from_path(app.local_file("minutes.txt", b"agenda")).unwrap(),
            PendingUpload::from_bytes("chart.png", vec![0x89u8, b'P', b'N', b'G']),
        ])
        .await;

    assert!(report.is_complete());
    assert_eq!(report.notifications.len(), 1);
    assert_eq!(report.notifications[0].kind, NotificationKind::Humanized);
    assert_eq!(
        report.notifications[0].message,
        "Uploaded files: [minutes.txt, chart.png]"
    );

    let stored = app.ctx.descriptors.find_all().await.unwrap();
    assert_eq!(stored.len(), 2);
    for descriptor in &stored {
        let bytes = app.ctx.storage.read_bytes(&descriptor.storage_path).await.unwrap();
        assert_eq!(bytes.len() as u64, descriptor.size_bytes);
    }

    assert_eq!(screen.tree().await, before);
}

#[tokio::test]
async fn test_oversized_upload_is_reported() {
    let app = TestApp::build(Some(DRIVE_PAGE), CyclePolicy::Break, 8).await;
    let screen = app.screen();

    let report = screen
        .upload(vec![
            PendingUpload::from_bytes("small.txt", "ok"),
            PendingUpload::from_path(app.local_file("large.bin", &[1u8; 64])).unwrap(),
        ])
        .await;

    assert_eq!(report.uploaded.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].name, "large.bin");

    let kinds: Vec<NotificationKind> = report.notifications.iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NotificationKind::Humanized, NotificationKind::Error]);
    assert!(report.notifications[1].message.starts_with("File upload error"));

    assert_eq!(app.ctx.descriptors.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_descriptors_survive_reopen() {
    let app = TestApp::without_listing().await;
    let report = app
        .screen()
        .upload(vec![PendingUpload::from_bytes("keep.pdf", "%PDF")])
        .await;
    let id = report.uploaded[0].id;

    let reopened = drivehub_cli::context::AppContext::new(app.ctx.config.clone())
        .await
        .unwrap();
    let found = reopened.descriptors.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.name, "keep.pdf");
    assert_eq!(found.mime_type.as_deref(), Some("application/pdf"));
}
