use atl_engine::readiness::waiters_of;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(task_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.service.snapshot().await?;
    if snapshot.task(task_id).is_none() {
        tracing::warn!(task_id, "task is not in the store; listing dangling restrictions only");
    }
    let mut waiters = waiters_of(&snapshot, task_id);
    apply_limit(&mut waiters, ctx.limit(flags.limit));
    output(&waiters, flags.format)
}
