use std::path::PathBuf;

use anyhow::Context;
use atl_config::{AtlConfig, PROJECT_DIR};
use atl_db::service::AtlService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitReport {
    project_root: String,
    config_path: String,
    config_written: bool,
    database_path: String,
}

/// Handle `atl init`: create `.atelier/`, a default config, and the store.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = PathBuf::from(&args.path);
    if !root.is_dir() {
        anyhow::bail!("cannot initialize '{}': directory does not exist", root.display());
    }

    let atelier_dir = root.join(PROJECT_DIR);
    std::fs::create_dir_all(&atelier_dir)
        .with_context(|| format!("failed to create {}", atelier_dir.display()))?;

    let config_path = AtlConfig::project_config_path(&root);
    let config_written = args.force || !config_path.exists();
    if config_written {
        let rendered = toml::to_string_pretty(&AtlConfig::default())
            .context("failed to render default configuration")?;
        std::fs::write(&config_path, rendered)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    let config = AtlConfig::load_for(&root).context("failed to load atelier configuration")?;
    let db_path = config.store.resolve(&root);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    AtlService::new_local(&db_path.to_string_lossy())
        .await
        .with_context(|| format!("failed to create task store at {}", db_path.display()))?;
    tracing::info!(root = %root.display(), "initialized atelier project");

    output(
        &InitReport {
            project_root: root.display().to_string(),
            config_path: config_path.display().to_string(),
            config_written,
            database_path: db_path.display().to_string(),
        },
        flags.format,
    )
}
