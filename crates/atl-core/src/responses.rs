//! Response types returned by the readiness, scoring, and dashboard queries.
//!
//! These structs define the shape of JSON output for commands like
//! `atl readiness waiters`, `atl scoring priority`, and `atl dashboard`.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Task;
use crate::enums::{Priority, TaskStatus};

/// One waiting task held by an active restriction against a blocking task.
///
/// When the waiting task is missing from the snapshot, `found` is `false` and
/// the name fields carry placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WaiterDetail {
    pub restriction_id: String,
    pub waiting_task_id: String,
    pub found: bool,
    pub task_title: String,
    pub status: Option<TaskStatus>,
    pub project_id: Option<String>,
    pub project_name: String,
    pub assignee_names: Vec<String>,
    pub waiting_since: DateTime<Utc>,
}

/// One blocking task an active restriction makes a waiting task wait on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BlockerDetail {
    pub restriction_id: String,
    pub blocking_task_id: String,
    pub found: bool,
    pub task_title: String,
    pub status: Option<TaskStatus>,
    pub project_name: String,
    pub blocking_user_id: Option<String>,
    pub blocking_user_name: String,
    pub waiting_since: DateTime<Utc>,
}

/// A task holding up work assigned to somebody else.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BlockingEntry {
    pub task: Task,
    /// Distinct waiting tasks, assigned to other people, gated by this task.
    pub waiting_count: u32,
}

/// Derived scoring attributes of a single task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskScore {
    pub task_id: String,
    pub due_date: Option<NaiveDate>,
    pub last_delivery: Option<NaiveDate>,
    pub days_until_due: Option<i64>,
    pub priority: Priority,
    pub points: u32,
}

/// Aggregate points earned by one person across delivered tasks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserScore {
    pub user_id: String,
    pub display_name: String,
    pub points: u64,
    pub delivered_tasks: u32,
}

/// Time-window buckets over a set of tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardSummary {
    pub upcoming: Vec<Task>,
    pub overdue: Vec<Task>,
    pub in_progress: Vec<Task>,
}

/// Every reporting view for a single person.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserDashboard {
    pub user_id: String,
    pub ready_to_start: Vec<Task>,
    pub blocked: Vec<Task>,
    pub blocking_others: Vec<BlockingEntry>,
    pub upcoming: Vec<Task>,
    pub overdue: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub total_points: u64,
}
