//! Integration tests for the drive screen over a snapshot listing.

mod helpers;

use drivehub_core::config::CyclePolicy;
use drivehub_entity::notification::NotificationKind;
use drivehub_entity::remote::RemoteFileId;

use helpers::{DRIVE_PAGE, TestApp};

#[tokio::test]
async fn test_open_builds_linked_tree() {
    let app = TestApp::with_listing(DRIVE_PAGE).await;
    let state = app.screen().open().await;

    assert!(state.notifications.is_empty());
    assert_eq!(state.tree.len(), 5);

    let team = state.tree.get("team").unwrap();
    assert_eq!(team.name, "Team");
    assert_eq!(team.parent.as_ref().map(|p| p.as_str()), Some("root"));

    let design = state.tree.get("design").unwrap();
    assert_eq!(design.parent.as_ref().map(|p| p.as_str()), Some("team"));

    let orphan = state.tree.get("orphan").unwrap();
    assert!(orphan.is_root());
    assert!(!state.tree.contains("gone"));

    let roots: Vec<&str> = state.tree.roots().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(roots, vec!["root", "orphan"]);
}

#[tokio::test]
async fn test_walk_is_depth_first() {
    let app = TestApp::with_listing(DRIVE_PAGE).await;
    let tree = app.screen().open().await.tree;

    let walked: Vec<(usize, &str)> = tree
        .walk()
        .into_iter()
        .map(|(depth, node)| (depth, node.id.as_str()))
        .collect();
    assert_eq!(
        walked,
        vec![
            (0, "root"),
            (1, "team"),
            (2, "sheet1"),
            (2, "design"),
            (0, "orphan"),
        ]
    );
}

#[tokio::test]
async fn test_select_previews_and_icons() {
    let app = TestApp::with_listing(DRIVE_PAGE).await;
    let screen = app.screen();
    screen.open().await;

    let sheet = screen.select(&RemoteFileId::from("sheet1")).await.unwrap();
    assert_eq!(sheet.icon.as_deref(), Some("icons/xls.png"));
    assert_eq!(
        sheet.preview.unwrap().as_str(),
        "https://drive.google.com/file/d/sheet1/preview"
    );

    let notes = screen.select(&RemoteFileId::from("orphan")).await.unwrap();
    assert_eq!(notes.icon, None);
}

#[tokio::test]
async fn test_missing_snapshot_gives_empty_tree() {
    let app = TestApp::without_listing().await;
    let state = app.screen().open().await;
    assert!(state.tree.is_empty());
    assert!(state.notifications.is_empty());
}

#[tokio::test]
async fn test_corrupt_snapshot_degrades_to_warning() {
    let app = TestApp::with_listing("{ not json").await;
    let state = app.screen().open().await;
    assert!(state.tree.is_empty());
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].kind, NotificationKind::Warning);
}

const CYCLE: &str = r#"[
    {"id": "A", "name": "a", "parents": ["B"]},
    {"id": "B", "name": "b", "parents": ["A"]}
]"#;

#[tokio::test]
async fn test_cycle_is_broken_with_warning() {
    let app = TestApp::with_listing(CYCLE).await;
    let state = app.screen().open().await;

    assert_eq!(state.tree.len(), 2);
    assert_eq!(state.tree.roots().len(), 1);
    assert_eq!(state.tree.broken_cycles().len(), 1);
    assert_eq!(state.notifications[0].kind, NotificationKind::Warning);
}

#[tokio::test]
async fn test_cycle_rejected_by_policy() {
    let app = TestApp::build(Some(CYCLE), CyclePolicy::Reject, 1024).await;
    let state = app.screen().open().await;

    assert!(state.tree.is_empty());
    assert_eq!(state.notifications.len(), 1);
    assert!(state.notifications[0].message.contains("A -> B -> A"));
}
