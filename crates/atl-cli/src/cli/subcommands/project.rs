use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Add a project.
    Add {
        #[arg(long)]
        name: String,
    },
    /// List projects.
    List,
}
