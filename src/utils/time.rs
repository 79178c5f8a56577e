//! Time utilities: parsing HH:MM, UTC offsets, RFC 3339 timestamps, hours rounding.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, NaiveTime, SecondsFormat, Timelike, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Office-hours times are configured at minute granularity.
pub fn format_hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Drop seconds and sub-seconds, keeping HH:MM.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// Drop sub-second precision.
pub fn truncate_to_second(t: NaiveTime) -> NaiveTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// Parse a `+HH:MM` / `-HH:MM` offset (also accepts `Z` and `UTC`).
pub fn parse_utc_offset(s: &str) -> AppResult<FixedOffset> {
    let raw = s.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::Config(s.to_string()));
    }

    let (sign, rest) = match raw.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => {
            return Err(AppError::Config(format!(
                "Invalid utc_offset '{s}' (expected ±HH:MM)"
            )));
        }
    };

    let (h, m) = rest
        .split_once(':')
        .ok_or_else(|| AppError::Config(format!("Invalid utc_offset '{s}' (expected ±HH:MM)")))?;

    let hours: i32 = h
        .parse()
        .map_err(|_| AppError::Config(format!("Invalid utc_offset hours in '{s}'")))?;
    let minutes: i32 = m
        .parse()
        .map_err(|_| AppError::Config(format!("Invalid utc_offset minutes in '{s}'")))?;

    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(AppError::Config(format!("utc_offset out of range: '{s}'")));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| AppError::Config(format!("utc_offset out of range: '{s}'")))
}

/// Timestamps are stored as RFC 3339 UTC text with millisecond precision.
pub fn to_db_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Whole seconds elapsed from `from` to `to`, truncated toward zero.
pub fn elapsed_seconds(from: &DateTime<Utc>, to: &DateTime<Utc>) -> i64 {
    (*to - *from).num_seconds()
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / 3600.0
}
