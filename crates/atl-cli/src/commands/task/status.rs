use atl_core::entities::{RestrictionEdge, Task};
use atl_core::enums::TaskStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusChange {
    task: Task,
    /// Restrictions released because the task was finished.
    resolved_restrictions: Vec<RestrictionEdge>,
}

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_enum::<TaskStatus>(status, "status")?;
    let (task, resolved_restrictions) = ctx
        .service
        .set_status_resolving(id, status, ctx.config.restrictions.auto_resolve_on_done)
        .await?;
    if !resolved_restrictions.is_empty() {
        tracing::info!(task_id = id, count = resolved_restrictions.len(), "auto-resolved restrictions");
    }

    output(
        &StatusChange {
            task,
            resolved_restrictions,
        },
        flags.format,
    )
}
