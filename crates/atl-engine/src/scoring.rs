//! Date-derived priority and point values.
//!
//! Dates carry no time of day and are read as midnight UTC. Priority measures
//! the distance from `now` to the due date; points measure how early a task
//! was delivered.

use std::collections::BTreeMap;

use atl_core::entities::{Profile, Task};
use atl_core::enums::{Priority, TaskStatus};
use atl_core::responses::{TaskScore, UserScore};
use chrono::{DateTime, NaiveDate, Utc};

use crate::readiness::USER_NOT_FOUND;

/// Tasks due within this many days are high priority.
pub const HIGH_PRIORITY_MAX_DAYS: i64 = 7;
/// Tasks due within this many days (and beyond the high tier) are medium priority.
pub const MEDIUM_PRIORITY_MAX_DAYS: i64 = 15;
pub const EARLY_POINTS_PER_DAY: i64 = 2;
pub const LATE_PENALTY_PER_DAY: i64 = 4;

const DAY_MS: i64 = 86_400_000;

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Whole days from `now` until the due date, rounded up. Negative once the
/// due date has passed.
#[must_use]
pub fn days_until_due(due_date: Option<NaiveDate>, now: DateTime<Utc>) -> Option<i64> {
    let due = midnight_utc(due_date?);
    let ms = (due - now).num_milliseconds();
    let whole = ms.div_euclid(DAY_MS);
    Some(if ms.rem_euclid(DAY_MS) == 0 { whole } else { whole + 1 })
}

/// Urgency tier for a due date. Overdue tasks stay high priority.
#[must_use]
pub fn derive_priority(due_date: Option<NaiveDate>, now: DateTime<Utc>) -> Priority {
    match days_until_due(due_date, now) {
        None => Priority::Medium,
        Some(days) if days <= HIGH_PRIORITY_MAX_DAYS => Priority::High,
        Some(days) if days <= MEDIUM_PRIORITY_MAX_DAYS => Priority::Medium,
        Some(_) => Priority::Low,
    }
}

/// Timeliness reward. Early delivery earns two points per day; late delivery
/// is penalised at four per day and then clamped, so the result is never
/// below zero.
#[must_use]
pub fn derive_points(due_date: Option<NaiveDate>, last_delivery: Option<NaiveDate>) -> u32 {
    let (Some(due), Some(delivered)) = (due_date, last_delivery) else {
        return 0;
    };
    let diff = (due - delivered).num_days();
    let raw = match diff.signum() {
        1 => diff * EARLY_POINTS_PER_DAY,
        -1 => diff * LATE_PENALTY_PER_DAY,
        _ => 0,
    };
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Value `completed_at` should hold after a commit.
///
/// Set only while the task is done and has a delivery date; an existing stamp
/// is kept so repeated commits do not move it.
#[must_use]
pub fn completion_stamp(
    status: TaskStatus,
    last_delivery: Option<NaiveDate>,
    existing: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    (status == TaskStatus::Done && last_delivery.is_some()).then(|| existing.unwrap_or(now))
}

#[must_use]
pub fn score_task(task: &Task, now: DateTime<Utc>) -> TaskScore {
    TaskScore {
        task_id: task.id.clone(),
        due_date: task.due_date,
        last_delivery: task.last_delivery,
        days_until_due: days_until_due(task.due_date, now),
        priority: derive_priority(task.due_date, now),
        points: derive_points(task.due_date, task.last_delivery),
    }
}

/// Stored points of done tasks summed per assignee, highest first.
#[must_use]
pub fn leaderboard(tasks: &[Task], profiles: &[Profile]) -> Vec<UserScore> {
    let mut totals: BTreeMap<&str, (u64, u32)> = BTreeMap::new();
    for task in tasks.iter().filter(|task| task.status == TaskStatus::Done) {
        for user_id in &task.assigned_to {
            let entry = totals.entry(user_id.as_str()).or_default();
            entry.0 += u64::from(task.points);
            entry.1 += 1;
        }
    }

    let mut scores: Vec<UserScore> = totals
        .into_iter()
        .map(|(user_id, (points, delivered_tasks))| UserScore {
            user_id: user_id.to_string(),
            display_name: profiles
                .iter()
                .find(|profile| profile.id == user_id)
                .map_or_else(|| USER_NOT_FOUND.to_string(), |p| p.display_name.clone()),
            points,
            delivered_tasks,
        })
        .collect();
    scores.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.user_id.cmp(&b.user_id)));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{at, date, profile, task};
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        at(2025, 8, 1, 10)
    }

    fn today_plus(days: i64) -> NaiveDate {
        now().date_naive() + Duration::days(days)
    }

    #[rstest]
    #[case::five_days_out(5, Priority::High)]
    #[case::ten_days_out(10, Priority::Medium)]
    #[case::thirty_days_out(30, Priority::Low)]
    #[case::due_today(0, Priority::High)]
    #[case::overdue(-3, Priority::High)]
    #[case::last_high_day(7, Priority::High)]
    #[case::first_medium_day(8, Priority::Medium)]
    #[case::last_medium_day(15, Priority::Medium)]
    #[case::first_low_day(16, Priority::Low)]
    fn priority_tiers(#[case] offset: i64, #[case] expected: Priority) {
        assert_eq!(derive_priority(Some(today_plus(offset)), now()), expected);
    }

    #[test]
    fn missing_due_date_is_medium() {
        assert_eq!(derive_priority(None, now()), Priority::Medium);
        assert_eq!(days_until_due(None, now()), None);
    }

    #[test]
    fn days_until_due_rounds_up_partial_days() {
        // 10:00 on Aug 1 to midnight Aug 6 is 4 days 14 hours.
        assert_eq!(days_until_due(Some(date(2025, 8, 6)), now()), Some(5));
        // Exactly on midnight there is no partial day.
        assert_eq!(days_until_due(Some(date(2025, 8, 6)), at(2025, 8, 1, 0)), Some(5));
        // Due today, later than midnight: ceil(-10h) is zero.
        assert_eq!(days_until_due(Some(date(2025, 8, 1)), now()), Some(0));
        // Jul 30 midnight is 2 days 10 hours back: ceil(-2.42) is -2.
        assert_eq!(days_until_due(Some(date(2025, 7, 30)), now()), Some(-2));
        assert_eq!(days_until_due(Some(date(2025, 7, 31)), at(2025, 8, 1, 3)), Some(-1));
    }

    #[test]
    fn priority_is_monotonic_in_days_until_due() {
        let rank = |p: Priority| match p {
            Priority::High => 2,
            Priority::Medium => 1,
            Priority::Low => 0,
        };
        let mut previous = rank(Priority::High);
        for offset in -10..60 {
            let current = rank(derive_priority(Some(today_plus(offset)), now()));
            assert!(current <= previous, "priority rose at offset {offset}");
            previous = current;
        }
    }

    #[rstest]
    #[case::early(date(2025, 8, 15), date(2025, 8, 10), 10)]
    #[case::late(date(2025, 8, 15), date(2025, 8, 20), 0)]
    #[case::on_time(date(2025, 8, 15), date(2025, 8, 15), 0)]
    #[case::one_day_early(date(2025, 8, 15), date(2025, 8, 14), 2)]
    #[case::one_day_late(date(2025, 8, 15), date(2025, 8, 16), 0)]
    fn points_from_delivery(#[case] due: NaiveDate, #[case] delivered: NaiveDate, #[case] expected: u32) {
        assert_eq!(derive_points(Some(due), Some(delivered)), expected);
    }

    #[test]
    fn points_need_both_dates() {
        assert_eq!(derive_points(None, Some(date(2025, 8, 10))), 0);
        assert_eq!(derive_points(Some(date(2025, 8, 10)), None), 0);
        assert_eq!(derive_points(None, None), 0);
    }

    #[test]
    fn points_are_never_negative() {
        let due = date(2025, 8, 15);
        for offset in -400..400 {
            let delivered = due + Duration::days(offset);
            let points = derive_points(Some(due), Some(delivered));
            if offset >= 0 {
                assert_eq!(points, 0);
            } else {
                assert_eq!(i64::from(points), -offset * EARLY_POINTS_PER_DAY);
            }
        }
    }

    #[test]
    fn recomputation_is_deterministic() {
        let mut t = task("t1", &["u1"], TaskStatus::Done);
        t.due_date = Some(date(2025, 8, 15));
        t.last_delivery = Some(date(2025, 8, 10));
        assert_eq!(score_task(&t, now()), score_task(&t, now()));
    }

    #[test]
    fn completion_stamp_follows_status_and_delivery() {
        let delivered = Some(date(2025, 8, 10));
        let earlier = at(2025, 8, 10, 18);

        assert_eq!(completion_stamp(TaskStatus::Done, delivered, None, now()), Some(now()));
        assert_eq!(
            completion_stamp(TaskStatus::Done, delivered, Some(earlier), now()),
            Some(earlier)
        );
        assert_eq!(completion_stamp(TaskStatus::Done, None, Some(earlier), now()), None);
        assert_eq!(
            completion_stamp(TaskStatus::InProgress, delivered, Some(earlier), now()),
            None
        );
    }

    #[test]
    fn score_task_bundles_derived_fields() {
        let mut t = task("t1", &["u1"], TaskStatus::Pending);
        t.due_date = Some(today_plus(10));
        let score = score_task(&t, now());
        assert_eq!(score.days_until_due, Some(10));
        assert_eq!(score.priority, Priority::Medium);
        assert_eq!(score.points, 0);
    }

    #[test]
    fn leaderboard_sums_done_tasks_per_assignee() {
        let mut a = task("a", &["u1", "u2"], TaskStatus::Done);
        a.points = 10;
        let mut b = task("b", &["u2"], TaskStatus::Done);
        b.points = 4;
        let mut c = task("c", &["u1"], TaskStatus::InProgress);
        c.points = 100;
        let mut d = task("d", &["u3"], TaskStatus::Done);
        d.points = 0;

        let board = leaderboard(&[a, b, c, d], &[profile("u1", "Ada"), profile("u2", "Bo")]);
        let rows: Vec<(&str, &str, u64, u32)> = board
            .iter()
            .map(|s| (s.user_id.as_str(), s.display_name.as_str(), s.points, s.delivered_tasks))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("u2", "Bo", 14, 2),
                ("u1", "Ada", 10, 1),
                ("u3", USER_NOT_FOUND, 0, 1),
            ]
        );
    }
}
