//! Immutable view of every collection the engine reads.

use atl_core::entities::{Profile, Project, RestrictionEdge, Task};
use serde::{Deserialize, Serialize};

/// Tasks, restriction edges, and the name tables used to resolve them, all
/// read at the same point in time.
///
/// The engine never assumes referential integrity: an edge may name a task
/// that is not in `tasks`, and an assignee may have no profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub restrictions: Vec<RestrictionEdge>,
    pub profiles: Vec<Profile>,
    pub projects: Vec<Project>,
}

impl Snapshot {
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[must_use]
    pub fn display_name(&self, user_id: &str) -> Option<&str> {
        self.profiles
            .iter()
            .find(|profile| profile.id == user_id)
            .map(|profile| profile.display_name.as_str())
    }

    #[must_use]
    pub fn project_name(&self, project_id: &str) -> Option<&str> {
        self.projects
            .iter()
            .find(|project| project.id == project_id)
            .map(|project| project.name.as_str())
    }

    /// Active edges only; resolved and cancelled edges never influence readiness.
    pub fn active_restrictions(&self) -> impl Iterator<Item = &RestrictionEdge> {
        self.restrictions.iter().filter(|edge| edge.is_active())
    }
}
