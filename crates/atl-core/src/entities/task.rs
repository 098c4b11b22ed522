use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{Priority, TaskStatus};

/// A unit of work inside a project, assigned to zero or more people.
///
/// `priority` and `points` are derived from the dates and are never set
/// directly; the store recomputes them whenever the dates they depend on change.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub status: TaskStatus,
    /// Accepts a single id or a list; always stored as a set.
    #[serde(default, deserialize_with = "one_or_many")]
    #[schemars(with = "BTreeSet<String>")]
    pub assigned_to: BTreeSet<String>,
    pub due_date: Option<NaiveDate>,
    pub activity_start: Option<NaiveDate>,
    pub last_delivery: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub points: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    #[must_use]
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assigned_to.contains(user_id)
    }

    /// True when the two tasks have at least one assignee in common.
    #[must_use]
    pub fn shares_assignee_with(&self, other: &Self) -> bool {
        !self.assigned_to.is_disjoint(&other.assigned_to)
    }
}

/// Normalize raw assignee ids into a set, dropping blanks and surrounding whitespace.
pub fn normalize_assignees<I, S>(ids: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .map(|id| id.as_ref().trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(id)) => normalize_assignees([id]),
        Some(OneOrMany::Many(ids)) => normalize_assignees(ids),
        None => BTreeSet::new(),
    })
}
