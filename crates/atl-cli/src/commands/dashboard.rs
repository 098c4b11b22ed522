use atl_engine::dashboard;
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atl dashboard`.
pub async fn handle(args: &DashboardArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let options = ctx.dashboard_options(args.window)?;
    let snapshot = ctx.service.snapshot().await?;
    let now = Utc::now();

    match args.user.as_deref() {
        Some(user_id) => {
            if snapshot.display_name(user_id).is_none() {
                tracing::warn!(user_id, "no profile for user");
            }
            output(&dashboard::for_user(&snapshot, user_id, now, options), flags.format)
        }
        None => output(&dashboard::summary(&snapshot, now, options), flags.format),
    }
}
