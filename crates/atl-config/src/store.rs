//! Task store location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Database file name inside the `.atelier` directory.
pub const DEFAULT_DB_FILE: &str = "atelier.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Explicit database path. Empty means `<project>/.atelier/atelier.db`.
    #[serde(default)]
    pub path: String,
}

impl StoreConfig {
    /// Database path for a project rooted at `project_root`.
    ///
    /// Relative configured paths resolve against the project root.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        if self.path.is_empty() {
            return project_root.join(".atelier").join(DEFAULT_DB_FILE);
        }
        let configured = PathBuf::from(&self.path);
        if configured.is_absolute() {
            configured
        } else {
            project_root.join(configured)
        }
    }
}
