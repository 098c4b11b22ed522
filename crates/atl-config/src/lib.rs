//! # atl-config
//!
//! Layered configuration loading for Atelier using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATELIER_*` prefix, `__` as separator)
//! 2. Project-level `.atelier/config.toml`
//! 3. User-level `~/.config/atelier/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATELIER_STORE__PATH` -> `store.path`,
//! `ATELIER_RESTRICTIONS__AUTO_RESOLVE_ON_DONE` -> `restrictions.auto_resolve_on_done`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use atl_config::AtlConfig;
//!
//! let config = AtlConfig::load_with_dotenv().expect("config");
//! println!("upcoming window: {} days", config.dashboard.upcoming_window_days);
//! ```

mod dashboard;
mod error;
mod general;
mod restrictions;
mod store;

pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use restrictions::RestrictionsConfig;
pub use store::{DEFAULT_DB_FILE, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment prefix for every setting.
pub const ENV_PREFIX: &str = "ATELIER_";

/// Project marker directory, holding the project config and default database.
pub const PROJECT_DIR: &str = ".atelier";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AtlConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub restrictions: RestrictionsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AtlConfig {
    /// Load configuration from all sources, reading the project file from the
    /// current directory.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration for the project rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is out of range.
    pub fn load_for(project_root: &Path) -> Result<Self, ConfigError> {
        Self::extract(Self::figment_in(project_root))
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain relative to the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_in(Path::new("."))
    }

    /// Build the figment provider chain for a project root.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment_in(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the project-level config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atelier").join("config.toml"))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.dashboard.validate()?;
        Ok(config)
    }
}
