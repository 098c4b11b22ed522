use std::path::PathBuf;

use anyhow::Context;
use atl_config::AtlConfig;
use atl_db::service::AtlService;
use atl_engine::DashboardOptions;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: AtlService,
    pub config: AtlConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the project store named by the configuration.
    pub async fn init(project_root: PathBuf, config: AtlConfig) -> anyhow::Result<Self> {
        let db_path = config.store.resolve(&project_root);
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        tracing::debug!(path = %db_path.display(), "opening task store");
        let service = AtlService::new_local(&db_path.to_string_lossy())
            .await
            .with_context(|| format!("failed to open task store at {}", db_path.display()))?;

        Ok(Self {
            service,
            config,
            project_root,
        })
    }

    /// Dashboard options from config, with an optional window override.
    pub fn dashboard_options(&self, window: Option<i64>) -> anyhow::Result<DashboardOptions> {
        let upcoming_window_days = window.unwrap_or(self.config.dashboard.upcoming_window_days);
        if upcoming_window_days < 0 {
            anyhow::bail!("--window must be zero or more, got {upcoming_window_days}");
        }
        Ok(DashboardOptions {
            upcoming_window_days,
        })
    }

    pub fn limit(&self, global: Option<u32>) -> usize {
        crate::commands::shared::limit::effective_limit(global, self.config.general.default_limit)
    }
}
