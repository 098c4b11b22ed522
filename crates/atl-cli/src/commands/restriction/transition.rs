use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn resolve(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let edge = ctx.service.resolve_restriction(id).await?;
    output(&edge, flags.format)
}

pub async fn cancel(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let edge = ctx.service.cancel_restriction(id).await?;
    output(&edge, flags.format)
}

pub async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_restriction(id).await?;
    output(&json!({ "id": id, "deleted": true }), flags.format)
}
