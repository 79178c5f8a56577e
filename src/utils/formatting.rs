//! Formatting utilities used for CLI outputs.

use chrono::{DateTime, FixedOffset, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}

/// 1.75 → "01h 45m"
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();
    format!("{sign}{:02}h {:02}m", m / 60, m % 60)
}

/// 6300 → "01:45:00"
pub fn secs2clock(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Render a stored UTC timestamp in the office offset.
pub fn local_stamp(ts: &DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
