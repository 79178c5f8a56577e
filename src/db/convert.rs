//! Text column ⇄ chrono / enum conversions shared by the row mappers.

use crate::errors::AppError;
use crate::models::overtime_status::OvertimeStatus;
use crate::models::overtime_type::OvertimeType;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rusqlite::Row;
use rusqlite::types::Type;

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

pub fn timestamp(row: &Row, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw).ok_or_else(|| conversion_error(idx, AppError::InvalidTime(raw)))
}

pub fn opt_timestamp(row: &Row, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(idx, AppError::InvalidTime(s))),
    }
}

pub fn date(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw)))
}

/// Accepts both "HH:MM" (office hours) and "HH:MM:SS" (ledger).
pub fn time_of_day(row: &Row, idx: usize) -> rusqlite::Result<NaiveTime> {
    let raw: String = row.get(idx)?;
    NaiveTime::parse_from_str(&raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M"))
        .map_err(|_| conversion_error(idx, AppError::InvalidTime(raw)))
}

pub fn overtime_type(row: &Row, idx: usize) -> rusqlite::Result<OvertimeType> {
    let raw: String = row.get(idx)?;
    OvertimeType::from_db_str(&raw)
        .ok_or_else(|| conversion_error(idx, AppError::InvalidOvertimeType(raw)))
}

pub fn overtime_status(row: &Row, idx: usize) -> rusqlite::Result<OvertimeStatus> {
    let raw: String = row.get(idx)?;
    OvertimeStatus::from_db_str(&raw)
        .ok_or_else(|| conversion_error(idx, AppError::Other(format!("Invalid status: {raw}"))))
}

pub fn flag(row: &Row, idx: usize) -> rusqlite::Result<bool> {
    Ok(row.get::<_, i64>(idx)? != 0)
}
