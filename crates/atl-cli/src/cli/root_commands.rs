use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ProfileCommands, ProjectCommands, ReadinessCommands, RestrictionCommands, ScoringCommands,
    TaskCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize atelier in a directory.
    Init(InitArgs),
    /// Who can start what, and who is holding whom up.
    Readiness {
        #[command(subcommand)]
        action: ReadinessCommands,
    },
    /// Derived priority and delivery points.
    Scoring {
        #[command(subcommand)]
        action: ScoringCommands,
    },
    /// Upcoming, overdue, and in-progress work, optionally for one person.
    Dashboard(DashboardArgs),
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Restrictions between tasks.
    Restriction {
        #[command(subcommand)]
        action: RestrictionCommands,
    },
    /// People.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
}

/// Arguments for `atl init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    #[arg(default_value = ".")]
    pub path: String,
    /// Overwrite an existing config.toml with defaults.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `atl dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Show the personal dashboard for this user id.
    #[arg(long)]
    pub user: Option<String>,
    /// Override `dashboard.upcoming_window_days`.
    #[arg(long)]
    pub window: Option<i64>,
}
