//! Task repository: creation, filtered listing, status and date mutations.
//!
//! Derived fields are never written by callers. `priority` follows the due
//! date, `points` follow the due and delivery dates, and `completed_at` is
//! re-evaluated on every status or date commit.

use std::collections::BTreeSet;

use atl_core::entities::{RestrictionEdge, Task};
use atl_core::enums::{RestrictionStatus, TaskStatus};
use atl_core::errors::CoreError;
use atl_core::ids::PREFIX_TASK;
use atl_engine::readiness;
use atl_engine::scoring::{completion_stamp, derive_points, derive_priority};
use chrono::{NaiveDate, Utc};

use crate::error::DatabaseError;
use crate::helpers::{
    format_assignees, format_optional_date, parse_assignees, parse_datetime, parse_enum,
    parse_optional_date, parse_optional_datetime,
};
use crate::repos::restriction::{RestrictionFilter, load_restrictions, resolve_blocked_by};
use crate::service::AtlService;
use crate::updates::task::DatesUpdate;

const SELECT_COLS: &str = "id, project_id, title, status, assigned_to, due_date, activity_start, \
     last_delivery, completed_at, priority, points, created_at, updated_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    let points = row.get::<i64>(10)?;
    Ok(Task {
        id: row.get(0)?,
        project_id: row.get(1)?,
        title: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        assigned_to: parse_assignees(&row.get::<String>(4)?)?,
        due_date: parse_optional_date(row.get::<Option<String>>(5)?.as_deref())?,
        activity_start: parse_optional_date(row.get::<Option<String>>(6)?.as_deref())?,
        last_delivery: parse_optional_date(row.get::<Option<String>>(7)?.as_deref())?,
        completed_at: parse_optional_datetime(row.get::<Option<String>>(8)?.as_deref())?,
        priority: parse_enum(&row.get::<String>(9)?)?,
        points: u32::try_from(points)
            .map_err(|_| DatabaseError::Query(format!("points out of range: {points}")))?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

/// Filter for [`AtlService::list_tasks`]. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<String>,
    pub project_id: Option<String>,
    pub limit: Option<u32>,
}

pub(crate) async fn load_tasks(
    conn: &libsql::Connection,
    filter: &TaskFilter,
) -> Result<Vec<Task>, DatabaseError> {
    let mut clauses = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();

    if let Some(status) = filter.status {
        params.push(status.as_str().into());
        clauses.push(format!("status = ?{}", params.len()));
    }
    if let Some(ref user_id) = filter.assigned_to {
        params.push(user_id.clone().into());
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM json_each(tasks.assigned_to) WHERE json_each.value = ?{})",
            params.len()
        ));
    }
    if let Some(ref project_id) = filter.project_id {
        params.push(project_id.clone().into());
        clauses.push(format!("project_id = ?{}", params.len()));
    }

    let mut sql = format!("SELECT {SELECT_COLS} FROM tasks");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at, id");
    if let Some(limit) = filter.limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        tasks.push(row_to_task(&row)?);
    }
    Ok(tasks)
}

pub(crate) async fn fetch_task(conn: &libsql::Connection, id: &str) -> Result<Task, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"), [id])
        .await?;
    let row = rows
        .next()
        .await?
        .ok_or_else(|| DatabaseError::not_found("task", id))?;
    row_to_task(&row)
}

impl AtlService {
    /// Create a pending task. Priority is derived from `due_date`; points start at zero.
    pub async fn create_task(
        &self,
        project_id: &str,
        title: &str,
        assigned_to: &BTreeSet<String>,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, DatabaseError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("task title is empty".into()).into());
        }
        self.get_project(project_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;
        let task = Task {
            id: id.clone(),
            project_id: project_id.to_string(),
            title: title.to_string(),
            status: TaskStatus::Pending,
            assigned_to: assigned_to.clone(),
            due_date,
            activity_start: None,
            last_delivery: None,
            completed_at: None,
            priority: derive_priority(due_date, now),
            points: 0,
            created_at: now,
            updated_at: now,
        };

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, NULL, NULL, ?7, 0, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    project_id,
                    title,
                    TaskStatus::Pending.as_str(),
                    format_assignees(assigned_to)?,
                    format_optional_date(due_date),
                    task.priority.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(%id, project_id, priority = %task.priority, "created task");
        Ok(task)
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        fetch_task(self.db().conn(), id).await
    }

    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        load_tasks(self.db().conn(), filter).await
    }

    /// Change a task's status.
    ///
    /// Starting a pending task is refused while active restrictions hold it.
    /// Entering `in_progress` stamps `activity_start` with today's date if unset.
    pub async fn set_status(&self, task_id: &str, status: TaskStatus) -> Result<Task, DatabaseError> {
        let (task, _) = self.set_status_resolving(task_id, status, false).await?;
        Ok(task)
    }

    /// [`set_status`](Self::set_status), and when `auto_resolve` is set and the
    /// task becomes `done`, resolve every active edge it blocks in the same
    /// transaction.
    ///
    /// Returns the updated task and the edges that were resolved.
    pub async fn set_status_resolving(
        &self,
        task_id: &str,
        status: TaskStatus,
        auto_resolve: bool,
    ) -> Result<(Task, Vec<RestrictionEdge>), DatabaseError> {
        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;
        let current = fetch_task(&tx, task_id).await?;

        if current.status.is_start(status) {
            let incoming = load_restrictions(
                &tx,
                &RestrictionFilter {
                    status: Some(RestrictionStatus::Active),
                    waiting_task_id: Some(task_id.to_string()),
                    ..RestrictionFilter::default()
                },
            )
            .await?;
            if !readiness::is_ready(task_id, &incoming) {
                let blockers = readiness::active_blocker_count(task_id, &incoming);
                tracing::debug!(task_id, blockers, "start refused");
                return Err(CoreError::TaskBlocked {
                    task_id: task_id.to_string(),
                    blockers,
                }
                .into());
            }
        }

        let activity_start = if status == TaskStatus::InProgress {
            current.activity_start.or_else(|| Some(now.date_naive()))
        } else {
            current.activity_start
        };
        let completed_at = completion_stamp(status, current.last_delivery, current.completed_at, now);

        tx.execute(
            "UPDATE tasks SET status = ?1, activity_start = ?2, completed_at = ?3, updated_at = ?4
             WHERE id = ?5",
            libsql::params![
                status.as_str(),
                format_optional_date(activity_start),
                completed_at.map(|at| at.to_rfc3339()),
                now.to_rfc3339(),
                task_id
            ],
        )
        .await?;
        let resolved = if auto_resolve && status == TaskStatus::Done {
            resolve_blocked_by(&tx, task_id, now).await?
        } else {
            Vec::new()
        };
        tx.commit().await?;

        tracing::debug!(task_id, from = %current.status, to = %status, "task status changed");
        let task = Task {
            status,
            activity_start,
            completed_at,
            updated_at: now,
            ..current
        };
        Ok((task, resolved))
    }

    /// Apply date changes and recompute the fields derived from them.
    pub async fn set_dates(&self, task_id: &str, update: DatesUpdate) -> Result<Task, DatabaseError> {
        if update.is_empty() {
            return self.get_task(task_id).await;
        }

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;
        let current = fetch_task(&tx, task_id).await?;

        let due_date = update.due_date.unwrap_or(current.due_date);
        let activity_start = update.activity_start.unwrap_or(current.activity_start);
        let last_delivery = update.last_delivery.unwrap_or(current.last_delivery);
        let priority = if update.touches_priority() {
            derive_priority(due_date, now)
        } else {
            current.priority
        };
        let points = if update.touches_points() {
            derive_points(due_date, last_delivery)
        } else {
            current.points
        };
        let completed_at =
            completion_stamp(current.status, last_delivery, current.completed_at, now);

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        for (column, value) in [
            ("due_date", update.due_date),
            ("activity_start", update.activity_start),
            ("last_delivery", update.last_delivery),
        ] {
            if let Some(date) = value {
                sets.push(format!("{column} = ?{idx}"));
                params.push(format_optional_date(date).map_or(libsql::Value::Null, Into::into));
                idx += 1;
            }
        }

        sets.push(format!("priority = ?{idx}"));
        params.push(priority.as_str().into());
        idx += 1;
        sets.push(format!("points = ?{idx}"));
        params.push(i64::from(points).into());
        idx += 1;
        sets.push(format!("completed_at = ?{idx}"));
        params.push(completed_at.map_or(libsql::Value::Null, |at| at.to_rfc3339().into()));
        idx += 1;
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(task_id.into());
        let sql = format!("UPDATE tasks SET {} WHERE id = ?{idx}", sets.join(", "));
        tx.execute(&sql, libsql::params_from_iter(params)).await?;
        tx.commit().await?;

        tracing::debug!(task_id, %priority, points, "task dates changed");
        Ok(Task {
            due_date,
            activity_start,
            last_delivery,
            completed_at,
            priority,
            points,
            updated_at: now,
            ..current
        })
    }
}
