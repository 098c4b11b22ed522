//! Task date update builder.

use chrono::NaiveDate;
use serde::Serialize;

/// Date changes for a task. The outer `Option` marks a field as changed; the
/// inner one clears it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_start: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_delivery: Option<Option<NaiveDate>>,
}

impl DatesUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.due_date.is_none() && self.activity_start.is_none() && self.last_delivery.is_none()
    }

    /// Whether the stored priority must be recomputed.
    #[must_use]
    pub const fn touches_priority(&self) -> bool {
        self.due_date.is_some()
    }

    /// Whether the stored points must be recomputed.
    #[must_use]
    pub const fn touches_points(&self) -> bool {
        self.due_date.is_some() || self.last_delivery.is_some()
    }
}

pub struct DatesUpdateBuilder(DatesUpdate);

impl DatesUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(DatesUpdate::default())
    }

    #[must_use]
    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn activity_start(mut self, activity_start: Option<NaiveDate>) -> Self {
        self.0.activity_start = Some(activity_start);
        self
    }

    #[must_use]
    pub fn last_delivery(mut self, last_delivery: Option<NaiveDate>) -> Self {
        self.0.last_delivery = Some(last_delivery);
        self
    }

    #[must_use]
    pub fn build(self) -> DatesUpdate {
        self.0
    }
}

impl Default for DatesUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
