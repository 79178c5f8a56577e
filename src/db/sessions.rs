use crate::db::convert;
use crate::errors::{AppError, AppResult, is_unique_violation};
use crate::models::session::{NewSession, TrackingSession};
use crate::utils::time::to_db_timestamp;
use chrono::{DateTime, Local, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SESSION_COLUMNS: &str = "id, employee_id, project_id, project_name, overtime_type, memo,
     start_time, is_paused, last_pause_time, total_break_seconds, created_at";

pub fn map_session(row: &Row) -> rusqlite::Result<TrackingSession> {
    Ok(TrackingSession {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        project_id: row.get(2)?,
        project_name: row.get(3)?,
        overtime_type: convert::overtime_type(row, 4)?,
        memo: row.get(5)?,
        start_time: convert::timestamp(row, 6)?,
        is_paused: convert::flag(row, 7)?,
        last_pause_time: convert::opt_timestamp(row, 8)?,
        total_break_seconds: row.get(9)?,
        created_at: row.get(10)?,
    })
}

pub fn find_by_employee(conn: &Connection, employee_id: &str) -> AppResult<Option<TrackingSession>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM overtime_tracking WHERE employee_id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([employee_id], map_session).optional()?)
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<TrackingSession>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM overtime_tracking WHERE id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_session).optional()?)
}

/// Insert a new session. Losing the race against a concurrent start for
/// the same employee surfaces as `SessionAlreadyActive` (UNIQUE employee_id).
pub fn insert_session(conn: &Connection, new: &NewSession) -> AppResult<TrackingSession> {
    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO overtime_tracking
            (employee_id, project_id, project_name, overtime_type, memo,
             start_time, is_paused, last_pause_time, total_break_seconds, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, NULL, 0, ?7)",
        params![
            new.employee_id,
            new.project_id,
            new.project_name,
            new.overtime_type.to_db_str(),
            new.memo,
            to_db_timestamp(&new.start_time),
            created_at,
        ],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::SessionAlreadyActive
        } else {
            AppError::from(e)
        }
    })?;

    Ok(TrackingSession {
        id: conn.last_insert_rowid(),
        employee_id: new.employee_id.clone(),
        project_id: new.project_id,
        project_name: new.project_name.clone(),
        overtime_type: new.overtime_type,
        memo: new.memo.clone(),
        start_time: new.start_time,
        is_paused: false,
        last_pause_time: None,
        total_break_seconds: 0,
        created_at,
    })
}

pub fn mark_paused(conn: &Connection, id: i64, at: &DateTime<Utc>) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE overtime_tracking SET is_paused = 1, last_pause_time = ?1 WHERE id = ?2",
        params![to_db_timestamp(at), id],
    )?;
    if n == 0 {
        return Err(AppError::NoActiveSession);
    }
    Ok(())
}

/// Clear the pause and add the closed break to the running total.
pub fn mark_resumed(conn: &Connection, id: i64, break_seconds: i64) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE overtime_tracking
         SET is_paused = 0,
             last_pause_time = NULL,
             total_break_seconds = total_break_seconds + ?1
         WHERE id = ?2",
        params![break_seconds, id],
    )?;
    if n == 0 {
        return Err(AppError::NoActiveSession);
    }
    Ok(())
}

pub fn delete_session(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM overtime_tracking WHERE id = ?1", [id])?;
    Ok(())
}
