//! Timestamp parsing and time-elapsed progress.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::ValidationError;

pub(crate) const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2024-01-10T12:00:00Z`, `+02:00` offsets), naive
/// date-times which are read as UTC, and bare dates which are read as UTC
/// midnight.
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let s = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValidationError::timestamp(field, value))
}

/// Fractional days from `from` to `to` (negative when `to` is earlier).
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_DAY
}

/// Percentage (0-100) of the window `[start, end]` that has elapsed at `now`.
///
/// A window with `end <= start` counts as fully elapsed once `now` reaches
/// `start`.
pub fn time_progress(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> u8 {
    if now < start {
        return 0;
    }
    if now >= end || end <= start {
        return 100;
    }

    let total = (end - start).num_milliseconds() as f64;
    let elapsed = (now - start).num_milliseconds() as f64;
    (elapsed / total * 100.0).round().clamp(0.0, 100.0) as u8
}
