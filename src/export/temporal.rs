//! Temporal parsing of raw start/end values.
//!
//! All interpretation is in the observer's local time zone. A value that
//! fails every parsing step is "unparseable": the owning shift stays in the
//! snapshot but is excluded from date bucketing and export.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

use crate::models::RawInstant;

/// Parses a raw start/end value into a local datetime.
///
/// Numeric values are epoch milliseconds. Textual values are tried as ISO
/// 8601 / RFC 3339 (offsets converted to local time), as a plain calendar
/// datetime, and as a bare date at midnight; if all of those fail, the text
/// is reinterpreted as a number and treated as epoch milliseconds.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_export::export::parse_instant;
/// use roster_export::models::RawInstant;
///
/// let parsed = parse_instant(&RawInstant::Text("2025-08-11T08:00:00".to_string())).unwrap();
/// assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 8, 11).unwrap());
///
/// assert!(parse_instant(&RawInstant::Text("soon".to_string())).is_none());
/// ```
pub fn parse_instant(raw: &RawInstant) -> Option<NaiveDateTime> {
    match raw {
        RawInstant::Millis(ms) => millis_to_local(*ms),
        RawInstant::Text(text) => parse_text(text).or_else(|| {
            text.trim()
                .parse::<f64>()
                .ok()
                .and_then(|n| millis_to_local(n as i64))
        }),
    }
}

/// Parses a strict `YYYY-MM-DD` date string.
pub fn parse_ymd(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

fn millis_to_local(ms: i64) -> Option<NaiveDateTime> {
    match Local.timestamp_millis_opt(ms) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.naive_local()),
        LocalResult::None => None,
    }
}
