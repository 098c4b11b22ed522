//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use std::collections::BTreeSet;

use atl_core::entities::normalize_assignees;
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DatabaseError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse an optional `YYYY-MM-DD` column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string is not a calendar date.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}"))),
        _ => Ok(None),
    }
}

/// Column representation of an optional date.
#[must_use]
pub fn format_optional_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all atl-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// Use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Decode the JSON array stored in `tasks.assigned_to`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is not a JSON array of strings.
pub fn parse_assignees(s: &str) -> Result<BTreeSet<String>, DatabaseError> {
    let ids: Vec<String> = serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid assignee list '{s}': {e}")))?;
    Ok(normalize_assignees(ids))
}

/// Encode an assignee set as a JSON array.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn format_assignees(ids: &BTreeSet<String>) -> Result<String, DatabaseError> {
    serde_json::to_string(ids).map_err(|e| DatabaseError::Other(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atl_core::enums::TaskStatus;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2025-08-10T09:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2025-08-10 09:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn dates_roundtrip_through_text() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let text = format_optional_date(Some(date));
        assert_eq!(text.as_deref(), Some("2025-08-15"));
        assert_eq!(parse_optional_date(text.as_deref()).unwrap(), Some(date));
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert!(parse_optional_date(Some("15/08/2025")).is_err());
    }

    #[test]
    fn assignees_are_normalized() {
        let ids = parse_assignees(r#"["usr-b", " usr-a ", "", "usr-b"]"#).unwrap();
        assert_eq!(
            ids.into_iter().collect::<Vec<_>>(),
            vec!["usr-a".to_string(), "usr-b".to_string()]
        );
        assert!(parse_assignees("usr-a").is_err());
    }

    #[rstest]
    #[case("pending", TaskStatus::Pending)]
    #[case("in_progress", TaskStatus::InProgress)]
    #[case("on_hold", TaskStatus::OnHold)]
    #[case("stalled", TaskStatus::Stalled)]
    fn stored_statuses_parse(#[case] text: &str, #[case] expected: TaskStatus) {
        assert_eq!(parse_enum::<TaskStatus>(text).unwrap(), expected);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(parse_enum::<TaskStatus>("archived").is_err());
        assert!(parse_enum::<TaskStatus>("InProgress").is_err());
    }
}
