//! Durations derived when a break closes or a session ends.

use crate::models::session::SessionTotals;
use crate::utils::time::{elapsed_seconds, round2, seconds_to_hours};
use chrono::{DateTime, Utc};

/// Whole seconds of a break; never negative so the session total only grows.
pub fn break_duration_seconds(break_start: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    elapsed_seconds(break_start, now).max(0)
}

/// Totals of a session ending at `end`. Hours are rounded to 2 decimals.
pub fn compute_totals(
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
    total_break_seconds: i64,
) -> SessionTotals {
    let total_seconds = elapsed_seconds(start, end).max(0);
    let actual_working_seconds = (total_seconds - total_break_seconds).max(0);

    SessionTotals {
        total_seconds,
        total_break_seconds,
        actual_working_seconds,
        total_hours: round2(seconds_to_hours(total_seconds)),
        actual_working_hours: round2(seconds_to_hours(actual_working_seconds)),
    }
}
