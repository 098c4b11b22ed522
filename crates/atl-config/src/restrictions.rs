//! Restriction lifecycle settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RestrictionsConfig {
    /// Resolve every active restriction a task blocks once that task is marked done.
    #[serde(default)]
    pub auto_resolve_on_done: bool,
}
