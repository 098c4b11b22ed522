//! Cross-cutting error types for Atelier.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `ConfigError`) are defined in
//! their respective crates. Errors from all crates converge into `anyhow` in
//! `atl-cli`.

use thiserror::Error;

/// Errors that can be raised by any Atelier crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// A restriction edge violates its construction contract.
    #[error("Invalid restriction: {0}")]
    InvalidEdge(String),

    /// An active restriction between the same pair of tasks already exists.
    #[error("Restriction already active: {waiting_task_id} waits on {blocking_task_id}")]
    DuplicateRestriction {
        waiting_task_id: String,
        blocking_task_id: String,
    },

    /// The restriction would close a cycle of active restrictions.
    #[error(
        "Restriction would create a cycle: {blocking_task_id} already waits on {waiting_task_id}"
    )]
    RestrictionCycle {
        waiting_task_id: String,
        blocking_task_id: String,
    },

    /// The task cannot start while active restrictions hold it.
    #[error("Task {task_id} is blocked by {blockers} active restriction(s)")]
    TaskBlocked { task_id: String, blockers: usize },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
