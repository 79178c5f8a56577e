use crate::db::convert;
use crate::errors::{AppError, AppResult, is_unique_violation};
use crate::models::break_record::BreakRecord;
use crate::utils::time::to_db_timestamp;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_break(row: &Row) -> rusqlite::Result<BreakRecord> {
    Ok(BreakRecord {
        id: row.get(0)?,
        tracking_id: row.get(1)?,
        break_start_time: convert::timestamp(row, 2)?,
        break_end_time: convert::opt_timestamp(row, 3)?,
        break_duration_seconds: row.get(4)?,
    })
}

/// Open a break. The partial unique index allows one open break per session.
pub fn open_break(conn: &Connection, tracking_id: i64, at: &DateTime<Utc>) -> AppResult<BreakRecord> {
    conn.execute(
        "INSERT INTO overtime_breaks (tracking_id, break_start_time) VALUES (?1, ?2)",
        params![tracking_id, to_db_timestamp(at)],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::AlreadyPaused
        } else {
            AppError::from(e)
        }
    })?;

    Ok(BreakRecord {
        id: conn.last_insert_rowid(),
        tracking_id,
        break_start_time: *at,
        break_end_time: None,
        break_duration_seconds: None,
    })
}

pub fn find_open_break(conn: &Connection, tracking_id: i64) -> AppResult<Option<BreakRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, tracking_id, break_start_time, break_end_time, break_duration_seconds
         FROM overtime_breaks
         WHERE tracking_id = ?1 AND break_end_time IS NULL",
    )?;
    Ok(stmt.query_row([tracking_id], map_break).optional()?)
}

pub fn load_open_breaks(conn: &Connection, tracking_id: i64) -> AppResult<Vec<BreakRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, tracking_id, break_start_time, break_end_time, break_duration_seconds
         FROM overtime_breaks
         WHERE tracking_id = ?1 AND break_end_time IS NULL
         ORDER BY break_start_time ASC",
    )?;
    let rows = stmt.query_map([tracking_id], map_break)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_breaks(conn: &Connection, tracking_id: i64) -> AppResult<Vec<BreakRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, tracking_id, break_start_time, break_end_time, break_duration_seconds
         FROM overtime_breaks
         WHERE tracking_id = ?1
         ORDER BY break_start_time ASC",
    )?;
    let rows = stmt.query_map([tracking_id], map_break)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn close_break(
    conn: &Connection,
    id: i64,
    at: &DateTime<Utc>,
    duration_seconds: i64,
) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE overtime_breaks
         SET break_end_time = ?1, break_duration_seconds = ?2
         WHERE id = ?3 AND break_end_time IS NULL",
        params![to_db_timestamp(at), duration_seconds, id],
    )?;
    if n == 0 {
        return Err(AppError::NoActiveBreak);
    }
    Ok(())
}
