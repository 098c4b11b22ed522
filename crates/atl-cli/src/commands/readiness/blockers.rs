use atl_engine::readiness::blockers_of;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(task_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.service.snapshot().await?;
    if snapshot.task(task_id).is_none() {
        tracing::warn!(task_id, "task is not in the store; listing dangling restrictions only");
    }
    let mut blockers = blockers_of(&snapshot, task_id);
    apply_limit(&mut blockers, ctx.limit(flags.limit));
    output(&blockers, flags.format)
}
