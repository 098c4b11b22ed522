use atl_core::enums::RestrictionStatus;
use atl_db::repos::restriction::RestrictionFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::apply_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    waiting: Option<&str>,
    blocking: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = RestrictionFilter {
        status: status
            .map(|raw| parse_enum::<RestrictionStatus>(raw, "status"))
            .transpose()?,
        waiting_task_id: waiting.map(str::to_string),
        blocking_task_id: blocking.map(str::to_string),
    };
    let mut edges = ctx.service.list_restrictions(&filter).await?;
    apply_limit(&mut edges, ctx.limit(flags.limit));
    output(&edges, flags.format)
}
