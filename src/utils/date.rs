use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Inclusive date bounds used to filter the overtime ledger.
pub type DateBounds = (NaiveDate, NaiveDate);

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Bounds for a single period token: `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn bounds_from_period(p: &str) -> AppResult<DateBounds> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        return Ok((first, last));
    }

    Err(AppError::InvalidDate(format!("Invalid period: {p}")))
}

/// Resolve a `--period` value.
///
/// `None` and `all` mean no filtering. `start:end` spans from the first day
/// of `start` to the last day of `end`.
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<DateBounds>> {
    let Some(p) = period else {
        return Ok(None);
    };

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = bounds_from_period(start)?;
        let (_, to) = bounds_from_period(end)?;
        if to < from {
            return Err(AppError::InvalidDate(format!(
                "Invalid range {p}: end precedes start"
            )));
        }
        return Ok(Some((from, to)));
    }

    bounds_from_period(p).map(Some)
}

fn last_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))
}
