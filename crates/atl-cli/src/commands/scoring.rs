use atl_core::enums::Priority;
use atl_engine::scoring::{leaderboard, score_task};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScoringCommands;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PriorityReport {
    task_id: String,
    due_date: Option<NaiveDate>,
    days_until_due: Option<i64>,
    priority: Priority,
}

#[derive(Debug, Serialize)]
struct PointsReport {
    task_id: String,
    due_date: Option<NaiveDate>,
    last_delivery: Option<NaiveDate>,
    points: u32,
}

/// Handle `atl scoring`.
pub async fn handle(
    action: &ScoringCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScoringCommands::Priority { task } => {
            let task = ctx.service.get_task(task).await?;
            let score = score_task(&task, Utc::now());
            output(
                &PriorityReport {
                    task_id: score.task_id,
                    due_date: score.due_date,
                    days_until_due: score.days_until_due,
                    priority: score.priority,
                },
                flags.format,
            )
        }
        ScoringCommands::Points { task } => {
            let task = ctx.service.get_task(task).await?;
            let score = score_task(&task, Utc::now());
            output(
                &PointsReport {
                    task_id: score.task_id,
                    due_date: score.due_date,
                    last_delivery: score.last_delivery,
                    points: score.points,
                },
                flags.format,
            )
        }
        ScoringCommands::Leaderboard => {
            let snapshot = ctx.service.snapshot().await?;
            let mut scores = leaderboard(&snapshot.tasks, &snapshot.profiles);
            apply_limit(&mut scores, ctx.limit(flags.limit));
            output(&scores, flags.format)
        }
    }
}
