use atl_core::entities::normalize_assignees;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project_id: &str,
    title: &str,
    assignees: &[String],
    due: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let due_date = due.map(|raw| parse_date(raw, "due")).transpose()?;
    let task = ctx
        .service
        .create_task(project_id, title, &normalize_assignees(assignees), due_date)
        .await?;
    output(&task, flags.format)
}
