//! Serde roundtrip and JsonSchema validation tests for all entity and response types.

use chrono::{NaiveDate, Utc};
use schemars::schema_for;
use atl_core::entities::*;
use atl_core::enums::*;
use atl_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn delivered_task() -> Task {
    Task {
        id: "tsk-a3f8b2c1".into(),
        project_id: "prj-0c1d2e3f".into(),
        title: "Lobby lighting plan".into(),
        status: TaskStatus::Done,
        assigned_to: normalize_assignees(["usr-11aa22bb", "usr-33cc44dd"]),
        due_date: Some(date(2025, 8, 15)),
        activity_start: Some(date(2025, 8, 1)),
        last_delivery: Some(date(2025, 8, 10)),
        completed_at: Some(Utc::now()),
        priority: Priority::High,
        points: 10,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

roundtrip_and_validate!(task_roundtrip, Task, delivered_task());

roundtrip_and_validate!(
    pending_task_roundtrip,
    Task,
    Task {
        id: "tsk-00000002".into(),
        project_id: "prj-0c1d2e3f".into(),
        title: "Material samples".into(),
        status: TaskStatus::Pending,
        assigned_to: normalize_assignees(Vec::<String>::new()),
        due_date: None,
        activity_start: None,
        last_delivery: None,
        completed_at: None,
        priority: Priority::Medium,
        points: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    restriction_roundtrip,
    RestrictionEdge,
    RestrictionEdge {
        id: "rst-9f8e7d6c".into(),
        waiting_task_id: "tsk-00000002".into(),
        blocking_task_id: "tsk-a3f8b2c1".into(),
        blocking_user_id: Some("usr-11aa22bb".into()),
        status: RestrictionStatus::Resolved,
        created_at: Utc::now(),
        resolved_at: Some(Utc::now()),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_restriction_roundtrip,
    NewRestriction,
    NewRestriction::new("tsk-00000002", "tsk-a3f8b2c1")
);

roundtrip_and_validate!(
    profile_roundtrip,
    Profile,
    Profile {
        id: "usr-11aa22bb".into(),
        display_name: "Marta Ruiz".into(),
    }
);

roundtrip_and_validate!(
    project_roundtrip,
    Project,
    Project {
        id: "prj-0c1d2e3f".into(),
        name: "Harbor Library".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    waiter_detail_roundtrip,
    WaiterDetail,
    WaiterDetail {
        restriction_id: "rst-9f8e7d6c".into(),
        waiting_task_id: "tsk-missing1".into(),
        found: false,
        task_title: "Task not found".into(),
        status: None,
        project_id: None,
        project_name: "Project not found".into(),
        assignee_names: vec![],
        waiting_since: Utc::now(),
    }
);

roundtrip_and_validate!(
    blocker_detail_roundtrip,
    BlockerDetail,
    BlockerDetail {
        restriction_id: "rst-9f8e7d6c".into(),
        blocking_task_id: "tsk-a3f8b2c1".into(),
        found: true,
        task_title: "Lobby lighting plan".into(),
        status: Some(TaskStatus::InProgress),
        project_name: "Harbor Library".into(),
        blocking_user_id: Some("usr-11aa22bb".into()),
        blocking_user_name: "Marta Ruiz".into(),
        waiting_since: Utc::now(),
    }
);

roundtrip_and_validate!(
    task_score_roundtrip,
    TaskScore,
    TaskScore {
        task_id: "tsk-a3f8b2c1".into(),
        due_date: Some(date(2025, 8, 15)),
        last_delivery: Some(date(2025, 8, 20)),
        days_until_due: Some(-3),
        priority: Priority::High,
        points: 0,
    }
);

roundtrip_and_validate!(
    user_dashboard_roundtrip,
    UserDashboard,
    UserDashboard {
        user_id: "usr-11aa22bb".into(),
        ready_to_start: vec![],
        blocked: vec![],
        blocking_others: vec![BlockingEntry {
            task: delivered_task(),
            waiting_count: 2,
        }],
        upcoming: vec![],
        overdue: vec![],
        in_progress: vec![],
        total_points: 10,
    }
);

roundtrip_and_validate!(
    leaderboard_entry_roundtrip,
    UserScore,
    UserScore {
        user_id: "usr-11aa22bb".into(),
        display_name: "Marta Ruiz".into(),
        points: 42,
        delivered_tasks: 5,
    }
);
