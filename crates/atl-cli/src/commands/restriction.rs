#[path = "restriction/check.rs"]
mod check;
#[path = "restriction/create.rs"]
mod create;
#[path = "restriction/list.rs"]
mod list;
#[path = "restriction/transition.rs"]
mod transition;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RestrictionCommands;
use crate::context::AppContext;

/// Handle `atl restriction`.
pub async fn handle(
    action: &RestrictionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RestrictionCommands::Create {
            waiting,
            blocking,
            blocking_user,
        } => create::run(waiting, blocking, blocking_user.as_deref(), ctx, flags).await,
        RestrictionCommands::Resolve { id } => transition::resolve(id, ctx, flags).await,
        RestrictionCommands::Cancel { id } => transition::cancel(id, ctx, flags).await,
        RestrictionCommands::Delete { id } => transition::delete(id, ctx, flags).await,
        RestrictionCommands::List {
            status,
            waiting,
            blocking,
        } => {
            list::run(
                status.as_deref(),
                waiting.as_deref(),
                blocking.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        RestrictionCommands::Check => check::run(ctx, flags).await,
    }
}
