use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a pending task.
    Create {
        /// Project the task belongs to.
        #[arg(long = "in", value_name = "PROJECT_ID")]
        project_id: String,
        #[arg(long)]
        title: String,
        /// Assignee user id (repeatable).
        #[arg(long)]
        assign: Vec<String>,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        due: Option<String>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// List tasks.
    List {
        #[arg(long)]
        status: Option<String>,
        /// Only tasks assigned to this user.
        #[arg(long)]
        user: Option<String>,
        #[arg(long = "in", value_name = "PROJECT_ID")]
        project_id: Option<String>,
    },
    /// Change a task's status.
    Status { id: String, status: String },
    /// Set or clear dates. Pass `none` to clear a date.
    Dates {
        id: String,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        delivery: Option<String>,
    },
}
