use atl_engine::readiness::blocking_summary;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn ready(user: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.service.snapshot().await?;
    let mut tasks = snapshot.ready_to_start(user);
    apply_limit(&mut tasks, ctx.limit(flags.limit));
    output(&tasks, flags.format)
}

pub async fn blocked(user: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.service.snapshot().await?;
    let mut tasks = snapshot.blocked_tasks(user);
    apply_limit(&mut tasks, ctx.limit(flags.limit));
    output(&tasks, flags.format)
}

/// Blocking tasks with how many other people's tasks each one holds.
pub async fn blocking(user: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.service.snapshot().await?;
    let mut entries = blocking_summary(&snapshot.tasks, &snapshot.restrictions, user);
    apply_limit(&mut entries, ctx.limit(flags.limit));
    output(&entries, flags.format)
}
