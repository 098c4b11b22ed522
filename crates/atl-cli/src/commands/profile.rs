use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atl profile`.
pub async fn handle(action: &ProfileCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Add { name, id } => {
            let profile = ctx.service.add_profile(name, id.as_deref()).await?;
            output(&profile, flags.format)
        }
        ProfileCommands::List => {
            let mut profiles = ctx.service.list_profiles().await?;
            apply_limit(&mut profiles, ctx.limit(flags.limit));
            output(&profiles, flags.format)
        }
    }
}
