#[path = "readiness/blockers.rs"]
mod blockers;
#[path = "readiness/personal.rs"]
mod personal;
#[path = "readiness/waiters.rs"]
mod waiters;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReadinessCommands;
use crate::context::AppContext;

/// Handle `atl readiness`.
pub async fn handle(
    action: &ReadinessCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReadinessCommands::Ready { user } => personal::ready(user, ctx, flags).await,
        ReadinessCommands::Blocked { user } => personal::blocked(user, ctx, flags).await,
        ReadinessCommands::Blocking { user } => personal::blocking(user, ctx, flags).await,
        ReadinessCommands::Waiters { task } => waiters::run(task, ctx, flags).await,
        ReadinessCommands::Blockers { task } => blockers::run(task, ctx, flags).await,
    }
}
