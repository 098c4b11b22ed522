use clap::Subcommand;

/// Derived scoring attributes.
#[derive(Clone, Debug, Subcommand)]
pub enum ScoringCommands {
    /// Priority tier derived from the due date.
    Priority {
        #[arg(long)]
        task: String,
    },
    /// Points earned by the last delivery.
    Points {
        #[arg(long)]
        task: String,
    },
    /// Points per person across delivered tasks.
    Leaderboard,
}
