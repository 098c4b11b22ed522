use clap::Subcommand;

/// Restriction edge commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RestrictionCommands {
    /// Declare that one task waits on another.
    Create {
        #[arg(long)]
        waiting: String,
        #[arg(long)]
        blocking: String,
        /// Person responsible for unblocking (defaults to the blocking task's first assignee).
        #[arg(long)]
        blocking_user: Option<String>,
    },
    /// Mark an active restriction resolved.
    Resolve { id: String },
    /// Cancel an active restriction.
    Cancel { id: String },
    /// Delete a restriction outright.
    Delete { id: String },
    /// List restrictions.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        waiting: Option<String>,
        #[arg(long)]
        blocking: Option<String>,
    },
    /// Report cycles among active restrictions.
    Check,
}
