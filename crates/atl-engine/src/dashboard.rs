//! Reporting views composed from readiness and scoring.

use atl_core::entities::Task;
use atl_core::enums::TaskStatus;
use atl_core::responses::{DashboardSummary, UserDashboard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::readiness;
use crate::scoring::days_until_due;
use crate::snapshot::Snapshot;

pub const DEFAULT_UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOptions {
    /// Tasks due within this many days count as upcoming.
    pub upcoming_window_days: i64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
        }
    }
}

fn open(task: &Task) -> bool {
    task.status != TaskStatus::Done
}

fn by_due_date(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date).then_with(|| a.id.cmp(&b.id)));
    tasks
}

/// Open tasks due between today and the end of the window.
#[must_use]
pub fn upcoming<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    now: DateTime<Utc>,
    options: DashboardOptions,
) -> Vec<Task> {
    let window = 0..=options.upcoming_window_days;
    by_due_date(
        tasks
            .into_iter()
            .filter(|task| open(task))
            .filter(|task| {
                days_until_due(task.due_date, now).is_some_and(|days| window.contains(&days))
            })
            .cloned()
            .collect(),
    )
}

/// Open tasks whose due date falls before today.
#[must_use]
pub fn overdue<'a>(tasks: impl IntoIterator<Item = &'a Task>, now: DateTime<Utc>) -> Vec<Task> {
    let today = now.date_naive();
    by_due_date(
        tasks
            .into_iter()
            .filter(|task| open(task))
            .filter(|task| task.due_date.is_some_and(|due| due < today))
            .cloned()
            .collect(),
    )
}

#[must_use]
pub fn in_progress<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task.status == TaskStatus::InProgress)
        .cloned()
        .collect()
}

/// The three time buckets over every task in the snapshot.
#[must_use]
pub fn summary(snapshot: &Snapshot, now: DateTime<Utc>, options: DashboardOptions) -> DashboardSummary {
    DashboardSummary {
        upcoming: upcoming(&snapshot.tasks, now, options),
        overdue: overdue(&snapshot.tasks, now),
        in_progress: in_progress(&snapshot.tasks),
    }
}

/// Every view for one person. Time buckets only include tasks assigned to them.
#[must_use]
pub fn for_user(
    snapshot: &Snapshot,
    user_id: &str,
    now: DateTime<Utc>,
    options: DashboardOptions,
) -> UserDashboard {
    let mine: Vec<&Task> = snapshot
        .tasks
        .iter()
        .filter(|task| task.is_assigned_to(user_id))
        .collect();
    let total_points = mine
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .map(|task| u64::from(task.points))
        .sum();

    UserDashboard {
        user_id: user_id.to_string(),
        ready_to_start: snapshot.ready_to_start(user_id).into_iter().cloned().collect(),
        blocked: snapshot.blocked_tasks(user_id).into_iter().cloned().collect(),
        blocking_others: readiness::blocking_summary(&snapshot.tasks, &snapshot.restrictions, user_id),
        upcoming: upcoming(mine.iter().copied(), now, options),
        overdue: overdue(mine.iter().copied(), now),
        in_progress: in_progress(mine.iter().copied()),
        total_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{active, at, date, pending, task};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        at(2025, 8, 10, 15)
    }

    fn due(mut task: Task, y: i32, m: u32, d: u32) -> Task {
        task.due_date = Some(date(y, m, d));
        task
    }

    fn task_ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    #[test]
    fn upcoming_window_is_inclusive_and_skips_done() {
        let tasks = vec![
            due(pending("today", "u1"), 2025, 8, 10),
            due(pending("edge", "u1"), 2025, 8, 17),
            due(pending("beyond", "u1"), 2025, 8, 18),
            due(task("done", &["u1"], TaskStatus::Done), 2025, 8, 12),
            due(pending("past", "u1"), 2025, 8, 9),
            pending("undated", "u1"),
        ];
        let found = upcoming(&tasks, now(), DashboardOptions::default());
        assert_eq!(task_ids(&found), vec!["today", "edge"]);
    }

    #[test]
    fn upcoming_window_is_configurable() {
        let tasks = vec![due(pending("t1", "u1"), 2025, 8, 20)];
        assert!(upcoming(&tasks, now(), DashboardOptions::default()).is_empty());
        let wide = DashboardOptions {
            upcoming_window_days: 14,
        };
        assert_eq!(task_ids(&upcoming(&tasks, now(), wide)), vec!["t1"]);
    }

    #[test]
    fn overdue_compares_dates_only() {
        let tasks = vec![
            due(pending("yesterday", "u1"), 2025, 8, 9),
            due(pending("today", "u1"), 2025, 8, 10),
            due(task("late-done", &["u1"], TaskStatus::Done), 2025, 8, 1),
            due(task("stalled", &["u1"], TaskStatus::Stalled), 2025, 7, 1),
        ];
        assert_eq!(task_ids(&overdue(&tasks, now())), vec!["stalled", "yesterday"]);
    }

    #[test]
    fn buckets_are_independent() {
        let t = due(task("t1", &["u1"], TaskStatus::InProgress), 2025, 8, 12);
        let snapshot = Snapshot {
            tasks: vec![t],
            ..Snapshot::default()
        };
        let summary = summary(&snapshot, now(), DashboardOptions::default());
        assert_eq!(task_ids(&summary.upcoming), vec!["t1"]);
        assert_eq!(task_ids(&summary.in_progress), vec!["t1"]);
        assert!(summary.overdue.is_empty());
    }

    #[test]
    fn user_dashboard_only_covers_their_tasks() {
        let mut delivered = task("d1", &["u1"], TaskStatus::Done);
        delivered.points = 6;
        let snapshot = Snapshot {
            tasks: vec![
                pending("r1", "u1"),
                pending("b1", "u1"),
                pending("w1", "u2"),
                due(task("p1", &["u1"], TaskStatus::InProgress), 2025, 8, 8),
                due(task("p2", &["u2"], TaskStatus::InProgress), 2025, 8, 8),
                delivered,
            ],
            restrictions: vec![active("e1", "b1", "p2"), active("e2", "w1", "p1")],
            ..Snapshot::default()
        };

        let view = for_user(&snapshot, "u1", now(), DashboardOptions::default());
        assert_eq!(task_ids(&view.ready_to_start), vec!["r1"]);
        assert_eq!(task_ids(&view.blocked), vec!["b1"]);
        assert_eq!(view.blocking_others.len(), 1);
        assert_eq!(view.blocking_others[0].task.id, "p1");
        assert_eq!(task_ids(&view.overdue), vec!["p1"]);
        assert_eq!(task_ids(&view.in_progress), vec!["p1"]);
        assert!(view.upcoming.is_empty());
        assert_eq!(view.total_points, 6);
    }
}
