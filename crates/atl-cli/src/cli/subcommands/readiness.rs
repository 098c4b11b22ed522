use clap::Subcommand;

/// Readiness queries over the current snapshot.
#[derive(Clone, Debug, Subcommand)]
pub enum ReadinessCommands {
    /// Pending tasks the user can start now.
    Ready {
        #[arg(long)]
        user: String,
    },
    /// Pending tasks of the user held by at least one active restriction.
    Blocked {
        #[arg(long)]
        user: String,
    },
    /// The user's tasks that hold up somebody else's work.
    Blocking {
        #[arg(long)]
        user: String,
    },
    /// Tasks waiting on the given task.
    Waiters {
        #[arg(long)]
        task: String,
    },
    /// Tasks the given task is waiting on.
    Blockers {
        #[arg(long)]
        task: String,
    },
}
