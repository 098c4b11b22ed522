//! Restriction repository: edge creation with duplicate and cycle checks, and
//! the `active → resolved | cancelled` lifecycle.

use atl_core::entities::{NewRestriction, RestrictionEdge};
use atl_core::enums::RestrictionStatus;
use atl_core::errors::CoreError;
use atl_core::ids::PREFIX_RESTRICTION;
use atl_engine::graph;
use chrono::{DateTime, Utc};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_datetime};
use crate::repos::task::fetch_task;
use crate::service::AtlService;

const SELECT_COLS: &str = "id, waiting_task_id, blocking_task_id, blocking_user_id, status, \
     created_at, resolved_at, updated_at";

fn row_to_restriction(row: &libsql::Row) -> Result<RestrictionEdge, DatabaseError> {
    Ok(RestrictionEdge {
        id: row.get(0)?,
        waiting_task_id: row.get(1)?,
        blocking_task_id: row.get(2)?,
        blocking_user_id: get_opt_string(row, 3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        resolved_at: parse_optional_datetime(row.get::<Option<String>>(6)?.as_deref())?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

/// Filter for [`AtlService::list_restrictions`]. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct RestrictionFilter {
    pub status: Option<RestrictionStatus>,
    pub waiting_task_id: Option<String>,
    pub blocking_task_id: Option<String>,
}

pub(crate) async fn load_restrictions(
    conn: &libsql::Connection,
    filter: &RestrictionFilter,
) -> Result<Vec<RestrictionEdge>, DatabaseError> {
    let mut clauses = Vec::new();
    let mut params: Vec<libsql::Value> = Vec::new();

    if let Some(status) = filter.status {
        params.push(status.as_str().into());
        clauses.push(format!("status = ?{}", params.len()));
    }
    if let Some(ref id) = filter.waiting_task_id {
        params.push(id.clone().into());
        clauses.push(format!("waiting_task_id = ?{}", params.len()));
    }
    if let Some(ref id) = filter.blocking_task_id {
        params.push(id.clone().into());
        clauses.push(format!("blocking_task_id = ?{}", params.len()));
    }

    let mut sql = format!("SELECT {SELECT_COLS} FROM restrictions");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at, id");

    let mut rows = conn.query(&sql, libsql::params_from_iter(params)).await?;
    let mut edges = Vec::new();
    while let Some(row) = rows.next().await? {
        edges.push(row_to_restriction(&row)?);
    }
    Ok(edges)
}

async fn fetch_restriction(
    conn: &libsql::Connection,
    id: &str,
) -> Result<RestrictionEdge, DatabaseError> {
    let mut rows = conn
        .query(&format!("SELECT {SELECT_COLS} FROM restrictions WHERE id = ?1"), [id])
        .await?;
    let row = rows
        .next()
        .await?
        .ok_or_else(|| DatabaseError::not_found("restriction", id))?;
    row_to_restriction(&row)
}

impl AtlService {
    /// Declare that one task waits on another.
    ///
    /// Rejects malformed edges, edges naming unknown tasks, a second active
    /// edge for the same pair, and edges that would close a cycle. When no
    /// blocking user is given, the blocking task's first assignee is used.
    pub async fn create_restriction(
        &self,
        request: &NewRestriction,
    ) -> Result<RestrictionEdge, DatabaseError> {
        request.validate()?;
        let waiting_id = request.waiting_task_id.trim();
        let blocking_id = request.blocking_task_id.trim();

        let id = self.db().generate_id(PREFIX_RESTRICTION).await?;
        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;

        fetch_task(&tx, waiting_id).await?;
        let blocking = fetch_task(&tx, blocking_id).await?;

        let active = load_restrictions(
            &tx,
            &RestrictionFilter {
                status: Some(RestrictionStatus::Active),
                ..RestrictionFilter::default()
            },
        )
        .await?;
        if active
            .iter()
            .any(|e| e.waiting_task_id == waiting_id && e.blocking_task_id == blocking_id)
        {
            return Err(CoreError::DuplicateRestriction {
                waiting_task_id: waiting_id.to_string(),
                blocking_task_id: blocking_id.to_string(),
            }
            .into());
        }
        if graph::would_create_cycle(&active, waiting_id, blocking_id) {
            return Err(CoreError::RestrictionCycle {
                waiting_task_id: waiting_id.to_string(),
                blocking_task_id: blocking_id.to_string(),
            }
            .into());
        }

        let blocking_user_id = request
            .blocking_user_id
            .clone()
            .or_else(|| blocking.assigned_to.iter().next().cloned());

        tx.execute(
            &format!(
                "INSERT INTO restrictions ({SELECT_COLS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, ?7)"
            ),
            libsql::params![
                id.as_str(),
                waiting_id,
                blocking_id,
                blocking_user_id.as_deref(),
                RestrictionStatus::Active.as_str(),
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )
        .await?;
        tx.commit().await?;

        tracing::debug!(%id, waiting_id, blocking_id, "created restriction");
        Ok(RestrictionEdge {
            id,
            waiting_task_id: waiting_id.to_string(),
            blocking_task_id: blocking_id.to_string(),
            blocking_user_id,
            status: RestrictionStatus::Active,
            created_at: now,
            resolved_at: None,
            updated_at: now,
        })
    }

    pub async fn get_restriction(&self, id: &str) -> Result<RestrictionEdge, DatabaseError> {
        fetch_restriction(self.db().conn(), id).await
    }

    pub async fn list_restrictions(
        &self,
        filter: &RestrictionFilter,
    ) -> Result<Vec<RestrictionEdge>, DatabaseError> {
        load_restrictions(self.db().conn(), filter).await
    }

    pub async fn resolve_restriction(&self, id: &str) -> Result<RestrictionEdge, DatabaseError> {
        self.transition_restriction(id, RestrictionStatus::Resolved).await
    }

    pub async fn cancel_restriction(&self, id: &str) -> Result<RestrictionEdge, DatabaseError> {
        self.transition_restriction(id, RestrictionStatus::Cancelled).await
    }

    async fn transition_restriction(
        &self,
        id: &str,
        next: RestrictionStatus,
    ) -> Result<RestrictionEdge, DatabaseError> {
        let now = Utc::now();
        let resolved_at = (next == RestrictionStatus::Resolved).then_some(now);
        // Only active edges move; the status guard keeps concurrent writers
        // from both succeeding.
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE restrictions SET status = ?1, resolved_at = ?2, updated_at = ?3
                 WHERE id = ?4 AND status = ?5",
                libsql::params![
                    next.as_str(),
                    resolved_at.map(|at| at.to_rfc3339()),
                    now.to_rfc3339(),
                    id,
                    RestrictionStatus::Active.as_str()
                ],
            )
            .await?;

        if affected == 0 {
            let current = self.get_restriction(id).await?;
            return Err(CoreError::InvalidTransition {
                entity_type: "restriction".into(),
                id: id.to_string(),
                from: current.status.to_string(),
                to: next.to_string(),
            }
            .into());
        }

        tracing::debug!(id, to = %next, "restriction status changed");
        self.get_restriction(id).await
    }

    /// Remove an edge outright, whatever its status.
    pub async fn delete_restriction(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM restrictions WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("restriction", id));
        }
        tracing::debug!(id, "deleted restriction");
        Ok(())
    }
}

/// Resolve every active edge that names `task_id` as its blocker with a single
/// statement on `conn`. Returns the edges that changed.
pub(crate) async fn resolve_blocked_by(
    conn: &libsql::Connection,
    task_id: &str,
    now: DateTime<Utc>,
) -> Result<Vec<RestrictionEdge>, DatabaseError> {
    let active = load_restrictions(
        conn,
        &RestrictionFilter {
            status: Some(RestrictionStatus::Active),
            blocking_task_id: Some(task_id.to_string()),
            ..RestrictionFilter::default()
        },
    )
    .await?;
    if active.is_empty() {
        return Ok(active);
    }

    conn.execute(
        "UPDATE restrictions SET status = ?1, resolved_at = ?2, updated_at = ?2
         WHERE blocking_task_id = ?3 AND status = ?4",
        libsql::params![
            RestrictionStatus::Resolved.as_str(),
            now.to_rfc3339(),
            task_id,
            RestrictionStatus::Active.as_str()
        ],
    )
    .await?;

    tracing::debug!(task_id, count = active.len(), "auto-resolved restrictions");
    Ok(active
        .into_iter()
        .map(|edge| RestrictionEdge {
            status: RestrictionStatus::Resolved,
            resolved_at: Some(now),
            updated_at: now,
            ..edge
        })
        .collect())
}
