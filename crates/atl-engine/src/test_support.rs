//! Shared builders for engine unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use atl_core::entities::{Profile, Project, RestrictionEdge, Task, normalize_assignees};
    use atl_core::enums::{Priority, RestrictionStatus, TaskStatus};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn at(y: i32, m: u32, d: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap()
    }

    pub fn task(id: &str, assignees: &[&str], status: TaskStatus) -> Task {
        let created = at(2025, 8, 1, 9);
        Task {
            id: id.to_string(),
            project_id: "prj-1".to_string(),
            title: format!("Task {id}"),
            status,
            assigned_to: normalize_assignees(assignees),
            due_date: None,
            activity_start: None,
            last_delivery: None,
            completed_at: None,
            priority: Priority::Medium,
            points: 0,
            created_at: created,
            updated_at: created,
        }
    }

    pub fn pending(id: &str, user: &str) -> Task {
        task(id, &[user], TaskStatus::Pending)
    }

    pub fn edge(id: &str, waiting: &str, blocking: &str, status: RestrictionStatus) -> RestrictionEdge {
        let created = at(2025, 8, 2, 9);
        RestrictionEdge {
            id: id.to_string(),
            waiting_task_id: waiting.to_string(),
            blocking_task_id: blocking.to_string(),
            blocking_user_id: None,
            status,
            created_at: created,
            resolved_at: None,
            updated_at: created,
        }
    }

    pub fn active(id: &str, waiting: &str, blocking: &str) -> RestrictionEdge {
        edge(id, waiting, blocking, RestrictionStatus::Active)
    }

    pub fn profile(id: &str, name: &str) -> Profile {
        Profile {
            id: id.to_string(),
            display_name: name.to_string(),
        }
    }

    pub fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            created_at: at(2025, 7, 1, 9),
        }
    }

    pub fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|task| task.id.clone()).collect()
    }
}
