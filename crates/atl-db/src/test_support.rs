//! Shared test utilities for atl-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::collections::BTreeSet;

    use atl_core::entities::{Task, normalize_assignees};
    use chrono::NaiveDate;

    use crate::AtlDb;
    use crate::service::AtlService;

    /// In-memory service with a fresh schema.
    pub async fn test_service() -> AtlService {
        let db = AtlDb::open_local(":memory:").await.unwrap();
        AtlService::from_db(db)
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn users(ids: &[&str]) -> BTreeSet<String> {
        normalize_assignees(ids)
    }

    /// Create a project and return its id.
    pub async fn seed_project(svc: &AtlService) -> String {
        svc.create_project("Harbor Library").await.unwrap().id
    }

    /// Create an undated pending task assigned to `assignees`.
    pub async fn seed_task(svc: &AtlService, project_id: &str, title: &str, assignees: &[&str]) -> Task {
        svc.create_task(project_id, title, &users(assignees), None)
            .await
            .unwrap()
    }
}
