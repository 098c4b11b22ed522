use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(root = %ctx.project_root.display(), "dispatching command");
    match command {
        Commands::Readiness { action } => commands::readiness::handle(&action, ctx, flags).await,
        Commands::Scoring { action } => commands::scoring::handle(&action, ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Restriction { action } => commands::restriction::handle(&action, ctx, flags).await,
        Commands::Profile { action } => commands::profile::handle(&action, ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Init(_) => unreachable!("init is pre-dispatched in main"),
    }
}
