use atl_engine::graph::find_cycles;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CycleReport {
    active_restrictions: usize,
    dangling_restrictions: usize,
    cycles: Vec<Vec<String>>,
}

/// Audit active restrictions for cycles and edges naming missing tasks.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.service.snapshot().await?;
    let active = snapshot.active_restrictions().count();
    let dangling = snapshot
        .active_restrictions()
        .filter(|edge| {
            snapshot.task(&edge.waiting_task_id).is_none()
                || snapshot.task(&edge.blocking_task_id).is_none()
        })
        .count();
    let cycles = find_cycles(&snapshot.restrictions);
    if !cycles.is_empty() {
        tracing::warn!(count = cycles.len(), "restriction cycles found");
    }

    output(
        &CycleReport {
            active_restrictions: active,
            dangling_restrictions: dangling,
            cycles,
        },
        flags.format,
    )
}
