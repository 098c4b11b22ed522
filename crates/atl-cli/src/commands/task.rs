#[path = "task/create.rs"]
mod create;
#[path = "task/dates.rs"]
mod dates;
#[path = "task/get.rs"]
mod get;
#[path = "task/list.rs"]
mod list;
#[path = "task/status.rs"]
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `atl task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            project_id,
            title,
            assign,
            due,
        } => create::run(project_id, title, assign, due.as_deref(), ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::List {
            status,
            user,
            project_id,
        } => {
            list::run(
                status.as_deref(),
                user.as_deref(),
                project_id.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
        TaskCommands::Dates {
            id,
            due,
            start,
            delivery,
        } => {
            let params = dates::Params {
                id: id.clone(),
                due: due.clone(),
                start: start.clone(),
                delivery: delivery.clone(),
            };
            dates::run(params, ctx, flags).await
        }
    }
}
