//! Readiness classification over tasks and restriction edges.
//!
//! A pending task is *ready to start* when no active edge names it as the
//! waiting side, and *blocked* otherwise; the two sets partition a person's
//! pending tasks. A task is *blocking others* when an active edge makes a task
//! held by somebody else wait on it.
//!
//! Edges that reference tasks missing from the snapshot never raise. For the
//! waiting side the edge still counts (a task whose blocker cannot be resolved
//! is still blocked); everywhere else the dangling reference is left out of
//! counts and shown through a placeholder.

use std::collections::{BTreeSet, HashMap, HashSet};

use atl_core::entities::{RestrictionEdge, Task};
use atl_core::enums::TaskStatus;
use atl_core::responses::{BlockerDetail, BlockingEntry, WaiterDetail};

use crate::snapshot::Snapshot;

pub const TASK_NOT_FOUND: &str = "Task not found";
pub const PROJECT_NOT_FOUND: &str = "Project not found";
pub const USER_NOT_FOUND: &str = "User not found";

fn active_waiting_ids(edges: &[RestrictionEdge]) -> HashSet<&str> {
    edges
        .iter()
        .filter(|edge| edge.is_active())
        .map(|edge| edge.waiting_task_id.as_str())
        .collect()
}

fn pending_for<'a, 'u>(
    tasks: &'a [Task],
    user_id: &'u str,
) -> impl Iterator<Item = &'a Task> + use<'a, 'u> {
    tasks
        .iter()
        .filter(move |task| task.status == TaskStatus::Pending && task.is_assigned_to(user_id))
}

/// Whether `task_id` has no active incoming restriction.
#[must_use]
pub fn is_ready(task_id: &str, edges: &[RestrictionEdge]) -> bool {
    active_blocker_count(task_id, edges) == 0
}

/// Number of active edges holding `task_id`, including edges whose blocking
/// task no longer exists.
#[must_use]
pub fn active_blocker_count(task_id: &str, edges: &[RestrictionEdge]) -> usize {
    edges
        .iter()
        .filter(|edge| edge.is_active() && edge.waiting_task_id == task_id)
        .count()
}

/// Pending tasks assigned to `user_id` with zero active incoming edges.
#[must_use]
pub fn ready_to_start<'a>(
    tasks: &'a [Task],
    edges: &[RestrictionEdge],
    user_id: &str,
) -> Vec<&'a Task> {
    let waiting = active_waiting_ids(edges);
    pending_for(tasks, user_id)
        .filter(|task| !waiting.contains(task.id.as_str()))
        .collect()
}

/// Pending tasks assigned to `user_id` with at least one active incoming edge.
#[must_use]
pub fn blocked_tasks<'a>(
    tasks: &'a [Task],
    edges: &[RestrictionEdge],
    user_id: &str,
) -> Vec<&'a Task> {
    let waiting = active_waiting_ids(edges);
    pending_for(tasks, user_id)
        .filter(|task| waiting.contains(task.id.as_str()))
        .collect()
}

/// Tasks assigned to `user_id` that gate at least one task held by a
/// different person.
#[must_use]
pub fn blocking_others<'a>(
    tasks: &'a [Task],
    edges: &[RestrictionEdge],
    user_id: &str,
) -> Vec<&'a Task> {
    cross_user_blocking(tasks, edges, user_id)
        .into_iter()
        .map(|(task, _)| task)
        .collect()
}

/// Like [`blocking_others`], with the number of distinct waiting tasks each
/// blocking task holds up.
#[must_use]
pub fn blocking_summary(
    tasks: &[Task],
    edges: &[RestrictionEdge],
    user_id: &str,
) -> Vec<BlockingEntry> {
    cross_user_blocking(tasks, edges, user_id)
        .into_iter()
        .map(|(task, waiting_count)| BlockingEntry {
            task: task.clone(),
            waiting_count,
        })
        .collect()
}

fn cross_user_blocking<'a>(
    tasks: &'a [Task],
    edges: &[RestrictionEdge],
    user_id: &str,
) -> Vec<(&'a Task, u32)> {
    let by_id: HashMap<&str, &Task> = tasks.iter().map(|task| (task.id.as_str(), task)).collect();

    let mut waiting_by_blocker: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges.iter().filter(|edge| edge.is_active()) {
        waiting_by_blocker
            .entry(edge.blocking_task_id.as_str())
            .or_default()
            .push(edge.waiting_task_id.as_str());
    }

    tasks
        .iter()
        .filter(|task| task.is_assigned_to(user_id))
        .filter_map(|blocking| {
            let waiting_ids = waiting_by_blocker.get(blocking.id.as_str())?;
            let held: BTreeSet<&str> = waiting_ids
                .iter()
                .filter_map(|waiting_id| match by_id.get(waiting_id) {
                    Some(waiting) => Some(*waiting),
                    None => {
                        tracing::debug!(
                            blocking_task_id = %blocking.id,
                            waiting_task_id = %waiting_id,
                            "restriction names a waiting task missing from snapshot"
                        );
                        None
                    }
                })
                .filter(|waiting| held_by_someone_else(blocking, waiting))
                .map(|waiting| waiting.id.as_str())
                .collect();
            let count = u32::try_from(held.len()).unwrap_or(u32::MAX);
            (count > 0).then_some((blocking, count))
        })
        .collect()
}

/// The waiting task crosses an assignment boundary: it has an owner and shares
/// none of them with the blocking task.
fn held_by_someone_else(blocking: &Task, waiting: &Task) -> bool {
    !waiting.assigned_to.is_empty() && !waiting.shares_assignee_with(blocking)
}

fn assignee_names(snapshot: &Snapshot, task: &Task) -> Vec<String> {
    task.assigned_to
        .iter()
        .map(|user_id| {
            snapshot
                .display_name(user_id)
                .unwrap_or(USER_NOT_FOUND)
                .to_string()
        })
        .collect()
}

fn project_name(snapshot: &Snapshot, project_id: &str) -> String {
    snapshot
        .project_name(project_id)
        .unwrap_or(PROJECT_NOT_FOUND)
        .to_string()
}

/// Tasks waiting on `blocking_task_id` through an active edge, with project
/// and assignee names resolved. Ordered by how long they have been waiting.
#[must_use]
pub fn waiters_of(snapshot: &Snapshot, blocking_task_id: &str) -> Vec<WaiterDetail> {
    let mut waiters: Vec<WaiterDetail> = snapshot
        .active_restrictions()
        .filter(|edge| edge.blocking_task_id == blocking_task_id)
        .map(|edge| match snapshot.task(&edge.waiting_task_id) {
            Some(task) => WaiterDetail {
                restriction_id: edge.id.clone(),
                waiting_task_id: task.id.clone(),
                found: true,
                task_title: task.title.clone(),
                status: Some(task.status),
                project_id: Some(task.project_id.clone()),
                project_name: project_name(snapshot, &task.project_id),
                assignee_names: assignee_names(snapshot, task),
                waiting_since: edge.created_at,
            },
            None => WaiterDetail {
                restriction_id: edge.id.clone(),
                waiting_task_id: edge.waiting_task_id.clone(),
                found: false,
                task_title: TASK_NOT_FOUND.to_string(),
                status: None,
                project_id: None,
                project_name: PROJECT_NOT_FOUND.to_string(),
                assignee_names: Vec::new(),
                waiting_since: edge.created_at,
            },
        })
        .collect();
    waiters.sort_by(|a, b| {
        a.waiting_since
            .cmp(&b.waiting_since)
            .then_with(|| a.restriction_id.cmp(&b.restriction_id))
    });
    waiters
}

/// Tasks `waiting_task_id` waits on through an active edge.
#[must_use]
pub fn blockers_of(snapshot: &Snapshot, waiting_task_id: &str) -> Vec<BlockerDetail> {
    let mut blockers: Vec<BlockerDetail> = snapshot
        .active_restrictions()
        .filter(|edge| edge.waiting_task_id == waiting_task_id)
        .map(|edge| {
            let blocking = snapshot.task(&edge.blocking_task_id);
            let blocking_user_name = edge
                .blocking_user_id
                .as_deref()
                .and_then(|user_id| snapshot.display_name(user_id))
                .unwrap_or(USER_NOT_FOUND)
                .to_string();
            BlockerDetail {
                restriction_id: edge.id.clone(),
                blocking_task_id: edge.blocking_task_id.clone(),
                found: blocking.is_some(),
                task_title: blocking.map_or_else(|| TASK_NOT_FOUND.to_string(), |t| t.title.clone()),
                status: blocking.map(|t| t.status),
                project_name: blocking.map_or_else(
                    || PROJECT_NOT_FOUND.to_string(),
                    |t| project_name(snapshot, &t.project_id),
                ),
                blocking_user_id: edge.blocking_user_id.clone(),
                blocking_user_name,
                waiting_since: edge.created_at,
            }
        })
        .collect();
    blockers.sort_by(|a, b| {
        a.waiting_since
            .cmp(&b.waiting_since)
            .then_with(|| a.restriction_id.cmp(&b.restriction_id))
    });
    blockers
}

impl Snapshot {
    #[must_use]
    pub fn ready_to_start(&self, user_id: &str) -> Vec<&Task> {
        ready_to_start(&self.tasks, &self.restrictions, user_id)
    }

    #[must_use]
    pub fn blocked_tasks(&self, user_id: &str) -> Vec<&Task> {
        blocked_tasks(&self.tasks, &self.restrictions, user_id)
    }

    #[must_use]
    pub fn blocking_others(&self, user_id: &str) -> Vec<&Task> {
        blocking_others(&self.tasks, &self.restrictions, user_id)
    }
}
