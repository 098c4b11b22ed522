mod profile;
mod project;
mod readiness;
mod restriction;
mod scoring;
mod task;

pub use profile::ProfileCommands;
pub use project::ProjectCommands;
pub use readiness::ReadinessCommands;
pub use restriction::RestrictionCommands;
pub use scoring::ScoringCommands;
pub use task::TaskCommands;
