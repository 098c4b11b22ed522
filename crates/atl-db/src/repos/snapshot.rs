//! Consistent reads for the engine.

use atl_engine::Snapshot;

use crate::error::DatabaseError;
use crate::repos::profile::load_profiles;
use crate::repos::project::load_projects;
use crate::repos::restriction::{RestrictionFilter, load_restrictions};
use crate::repos::task::{TaskFilter, load_tasks};
use crate::service::AtlService;

impl AtlService {
    /// Read every task, restriction, profile, and project in one transaction,
    /// so no edge in the result outlives a task deleted between reads.
    pub async fn snapshot(&self) -> Result<Snapshot, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let tasks = load_tasks(&tx, &TaskFilter::default()).await?;
        let restrictions = load_restrictions(&tx, &RestrictionFilter::default()).await?;
        let profiles = load_profiles(&tx).await?;
        let projects = load_projects(&tx).await?;
        tx.commit().await?;

        tracing::debug!(
            tasks = tasks.len(),
            restrictions = restrictions.len(),
            "read snapshot"
        );
        Ok(Snapshot {
            tasks,
            restrictions,
            profiles,
            projects,
        })
    }
}
