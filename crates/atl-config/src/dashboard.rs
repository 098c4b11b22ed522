//! Dashboard window settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_upcoming_window_days() -> i64 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Tasks due within this many days are listed as upcoming.
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: default_upcoming_window_days(),
        }
    }
}

impl DashboardConfig {
    /// Reject windows that can never match a task.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a negative window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upcoming_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                field: "dashboard.upcoming_window_days".into(),
                reason: format!("must be zero or more, got {}", self.upcoming_window_days),
            });
        }
        Ok(())
    }
}
