use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `atl project`.
pub async fn handle(action: &ProjectCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Add { name } => {
            let project = ctx.service.create_project(name).await?;
            output(&project, flags.format)
        }
        ProjectCommands::List => {
            let mut projects = ctx.service.list_projects().await?;
            apply_limit(&mut projects, ctx.limit(flags.limit));
            output(&projects, flags.format)
        }
    }
}
