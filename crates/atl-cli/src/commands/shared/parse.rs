use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error} (expected YYYY-MM-DD)"))
}

/// Parse a date that may be cleared with `none`.
pub fn parse_clearable_date(raw: &str, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    if raw.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    parse_date(raw, field).map(Some)
}
