use atl_core::entities::NewRestriction;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    waiting: &str,
    blocking: &str,
    blocking_user: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut request = NewRestriction::new(waiting, blocking);
    if let Some(user_id) = blocking_user {
        request = request.blocking_user(user_id);
    }
    let edge = ctx.service.create_restriction(&request).await?;
    output(&edge, flags.format)
}
