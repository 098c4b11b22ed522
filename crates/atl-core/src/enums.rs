//! Status enums and derived tiers for Atelier.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `RestrictionStatus` carries a state machine through `allowed_next_states()`;
//! task status is free-form apart from the start gate enforced by the store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// pending → in_progress → done
///         ↘ stalled / on_hold ↗
/// ```
///
/// `pending → in_progress` is the "start" transition and is refused while the
/// task has active incoming restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
    Stalled,
    OnHold,
}

impl TaskStatus {
    /// Whether moving from `self` to `next` starts the work on a task.
    #[must_use]
    pub const fn is_start(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::InProgress))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Stalled => "stalled",
            Self::OnHold => "on_hold",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Urgency tier derived from the days remaining until a task is due.
///
/// Ordering follows urgency: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RestrictionStatus
// ---------------------------------------------------------------------------

/// Status of a restriction edge.
///
/// ```text
/// active → resolved
///        → cancelled
/// ```
///
/// Only `active` edges block their waiting task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionStatus {
    Active,
    Resolved,
    Cancelled,
}

impl RestrictionStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Resolved, Self::Cancelled],
            Self::Resolved | Self::Cancelled => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RestrictionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(task_pending, TaskStatus, TaskStatus::Pending, "pending");
    test_serde_roundtrip!(
        task_in_progress,
        TaskStatus,
        TaskStatus::InProgress,
        "in_progress"
    );
    test_serde_roundtrip!(task_on_hold, TaskStatus, TaskStatus::OnHold, "on_hold");
    test_serde_roundtrip!(priority_high, Priority, Priority::High, "high");
    test_serde_roundtrip!(
        restriction_cancelled,
        RestrictionStatus,
        RestrictionStatus::Cancelled,
        "cancelled"
    );

    #[test]
    fn restriction_valid_transitions() {
        assert!(RestrictionStatus::Active.can_transition_to(RestrictionStatus::Resolved));
        assert!(RestrictionStatus::Active.can_transition_to(RestrictionStatus::Cancelled));
    }

    #[test]
    fn restriction_terminal_states() {
        assert!(RestrictionStatus::Resolved.allowed_next_states().is_empty());
        assert!(RestrictionStatus::Cancelled.allowed_next_states().is_empty());
        assert!(!RestrictionStatus::Resolved.can_transition_to(RestrictionStatus::Active));
    }

    #[test]
    fn only_active_blocks() {
        assert!(RestrictionStatus::Active.is_blocking());
        assert!(!RestrictionStatus::Resolved.is_blocking());
        assert!(!RestrictionStatus::Cancelled.is_blocking());
    }

    #[test]
    fn start_transition_is_pending_to_in_progress_only() {
        assert!(TaskStatus::Pending.is_start(TaskStatus::InProgress));
        assert!(!TaskStatus::Stalled.is_start(TaskStatus::InProgress));
        assert!(!TaskStatus::Pending.is_start(TaskStatus::Done));
    }

    #[test]
    fn priority_orders_by_urgency() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", TaskStatus::InProgress), "in_progress");
        assert_eq!(format!("{}", TaskStatus::OnHold), "on_hold");
        assert_eq!(format!("{}", Priority::Low), "low");
        assert_eq!(format!("{}", RestrictionStatus::Resolved), "resolved");
    }
}
