use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a record date.
///
/// Accepts `YYYY-MM-DD` (read as midnight), RFC 3339 timestamps (converted to
/// UTC) and `YYYY-MM-DDTHH:MM:SS` without an offset.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()
}
