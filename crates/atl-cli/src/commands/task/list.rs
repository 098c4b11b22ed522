use atl_core::enums::TaskStatus;
use atl_db::repos::task::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    user: Option<&str>,
    project_id: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_enum::<TaskStatus>(raw, "status"))
        .transpose()?;
    let limit = u32::try_from(ctx.limit(flags.limit)).unwrap_or(u32::MAX);

    let filter = TaskFilter {
        status,
        assigned_to: user.map(str::to_string),
        project_id: project_id.map(str::to_string),
        limit: (limit > 0).then_some(limit),
    };
    let tasks = ctx.service.list_tasks(&filter).await?;
    output(&tasks, flags.format)
}
