use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RestrictionStatus;
use crate::errors::CoreError;

/// A directed dependency: `waiting_task_id` cannot start until the edge is
/// no longer active. `blocking_task_id` is the task whose completion would
/// clear it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RestrictionEdge {
    pub id: String,
    pub waiting_task_id: String,
    pub blocking_task_id: String,
    /// Person accountable for the blocking task, denormalized for display.
    /// Defaults to the blocking task's first assignee; `None` when that task
    /// has no assignees. Readiness never depends on it.
    pub blocking_user_id: Option<String>,
    pub status: RestrictionStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl RestrictionEdge {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_blocking()
    }
}

/// Request to declare "task `waiting_task_id` waits on task `blocking_task_id`".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRestriction {
    pub waiting_task_id: String,
    pub blocking_task_id: String,
    /// Defaults to the first assignee of the blocking task when absent.
    pub blocking_user_id: Option<String>,
}

impl NewRestriction {
    #[must_use]
    pub fn new(waiting_task_id: impl Into<String>, blocking_task_id: impl Into<String>) -> Self {
        Self {
            waiting_task_id: waiting_task_id.into(),
            blocking_task_id: blocking_task_id.into(),
            blocking_user_id: None,
        }
    }

    #[must_use]
    pub fn blocking_user(mut self, user_id: impl Into<String>) -> Self {
        self.blocking_user_id = Some(user_id.into());
        self
    }

    /// Check the construction contract of an edge.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidEdge` if either task id is blank or both ids
    /// name the same task.
    pub fn validate(&self) -> Result<(), CoreError> {
        let waiting = self.waiting_task_id.trim();
        let blocking = self.blocking_task_id.trim();
        if waiting.is_empty() {
            return Err(CoreError::InvalidEdge("waiting task id is empty".into()));
        }
        if blocking.is_empty() {
            return Err(CoreError::InvalidEdge("blocking task id is empty".into()));
        }
        if waiting == blocking {
            return Err(CoreError::InvalidEdge(format!(
                "task {waiting} cannot wait on itself"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_edge_passes() {
        assert!(NewRestriction::new("tsk-a", "tsk-b").validate().is_ok());
    }

    #[test]
    fn self_edge_rejected() {
        let err = NewRestriction::new("tsk-a", "tsk-a").validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidEdge(_)));
        assert!(err.to_string().contains("cannot wait on itself"));
    }

    #[test]
    fn blank_ids_rejected() {
        assert!(matches!(
            NewRestriction::new("", "tsk-b").validate(),
            Err(CoreError::InvalidEdge(_))
        ));
        assert!(matches!(
            NewRestriction::new("tsk-a", "   ").validate(),
            Err(CoreError::InvalidEdge(_))
        ));
    }

    #[test]
    fn blocking_user_builder() {
        let req = NewRestriction::new("tsk-a", "tsk-b").blocking_user("usr-1");
        assert_eq!(req.blocking_user_id.as_deref(), Some("usr-1"));
    }
}
