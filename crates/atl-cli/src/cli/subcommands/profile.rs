use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Add a person.
    Add {
        #[arg(long)]
        name: String,
        /// Explicit user id (generated when omitted).
        #[arg(long)]
        id: Option<String>,
    },
    /// List people.
    List,
}
