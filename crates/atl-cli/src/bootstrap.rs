use std::path::Path;

use anyhow::Context;
use atl_config::AtlConfig;

/// Load `.env` from the project root (when present), then the layered config.
pub fn load_config(project_root: &Path) -> anyhow::Result<AtlConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    AtlConfig::load_for(project_root).context("failed to load atelier configuration")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::load_config;

    #[test]
    fn loads_defaults_without_project_files() {
        let temp = TempDir::new().expect("tempdir should create");
        let config = load_config(temp.path()).expect("config should load");
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn reads_project_config_file() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".atelier")).expect(".atelier should create");
        std::fs::write(
            temp.path().join(".atelier/config.toml"),
            "[dashboard]\nupcoming_window_days = 3\n",
        )
        .expect("config should write");

        let config = load_config(temp.path()).expect("config should load");
        assert_eq!(config.dashboard.upcoming_window_days, 3);
    }
}
