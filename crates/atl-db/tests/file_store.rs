//! File-backed store tests: data survives reopening and the engine sees it.

use atl_core::entities::{NewRestriction, normalize_assignees};
use atl_core::enums::{Priority, TaskStatus};
use atl_db::repos::task::TaskFilter;
use atl_db::service::AtlService;
use atl_db::updates::task::DatesUpdateBuilder;
use atl_engine::{DashboardOptions, dashboard, scoring};
use chrono::{Duration, NaiveDate, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

async fn open(dir: &TempDir) -> AtlService {
    let path = dir.path().join("atelier.db");
    AtlService::new_local(&path.to_string_lossy()).await.unwrap()
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let (task_id, edge_id) = {
        let svc = open(&dir).await;
        let project = svc.create_project("Harbor Library").await.unwrap();
        let a = svc
            .create_task(&project.id, "Concept", &normalize_assignees(["usr-a"]), None)
            .await
            .unwrap();
        let b = svc
            .create_task(&project.id, "Permits", &normalize_assignees(["usr-b"]), None)
            .await
            .unwrap();
        let edge = svc
            .create_restriction(&NewRestriction::new(&a.id, &b.id))
            .await
            .unwrap();
        (a.id, edge.id)
    };

    let svc = open(&dir).await;
    let task = svc.get_task(&task_id).await.unwrap();
    assert_eq!(task.title, "Concept");
    let edge = svc.get_restriction(&edge_id).await.unwrap();
    assert_eq!(edge.waiting_task_id, task_id);
    assert_eq!(svc.list_tasks(&TaskFilter::default()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn delivered_task_feeds_leaderboard_and_dashboard() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    svc.add_profile("Ana", Some("usr-a")).await.unwrap();
    let project = svc.create_project("Atrium").await.unwrap();

    let today = Utc::now().date_naive();
    let delivered = svc
        .create_task(&project.id, "Lighting plan", &normalize_assignees(["usr-a"]), None)
        .await
        .unwrap();
    svc.set_dates(
        &delivered.id,
        DatesUpdateBuilder::new()
            .due_date(Some(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()))
            .last_delivery(Some(NaiveDate::from_ymd_opt(2025, 8, 10).unwrap()))
            .build(),
    )
    .await
    .unwrap();
    let done = svc.set_status(&delivered.id, TaskStatus::Done).await.unwrap();
    assert_eq!(done.points, 10);
    assert!(done.completed_at.is_some());

    let soon = svc
        .create_task(
            &project.id,
            "Samples",
            &normalize_assignees(["usr-a"]),
            Some(today + Duration::days(2)),
        )
        .await
        .unwrap();
    assert_eq!(soon.priority, Priority::High);

    let snapshot = svc.snapshot().await.unwrap();
    let board = scoring::leaderboard(&snapshot.tasks, &snapshot.profiles);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].display_name, "Ana");
    assert_eq!(board[0].points, 10);

    let view = dashboard::for_user(&snapshot, "usr-a", Utc::now(), DashboardOptions::default());
    assert_eq!(view.total_points, 10);
    assert_eq!(view.upcoming.len(), 1);
    assert_eq!(view.upcoming[0].id, soon.id);
    assert!(view.overdue.is_empty());
}
