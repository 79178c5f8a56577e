use crate::db::convert;
use crate::errors::AppResult;
use crate::models::office_hours::OfficeHoursDay;
use crate::utils::time::format_hm;
use chrono::NaiveTime;
use rusqlite::{Connection, Row, params};

fn map_day(row: &Row) -> rusqlite::Result<OfficeHoursDay> {
    Ok(OfficeHoursDay {
        day_of_week: row.get(0)?,
        is_working_day: convert::flag(row, 1)?,
        start_time: convert::time_of_day(row, 2)?,
        end_time: convert::time_of_day(row, 3)?,
    })
}

pub fn load_office_hours(conn: &Connection) -> AppResult<Vec<OfficeHoursDay>> {
    let mut stmt = conn.prepare_cached(
        "SELECT day_of_week, is_working_day, start_time, end_time
         FROM office_hours
         ORDER BY day_of_week ASC",
    )?;
    let rows = stmt.query_map([], map_day)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Declare a working day with the given window (insert or replace).
pub fn upsert_working_day(
    conn: &Connection,
    day_of_week: u32,
    start: NaiveTime,
    end: NaiveTime,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO office_hours (day_of_week, is_working_day, start_time, end_time)
         VALUES (?1, 1, ?2, ?3)
         ON CONFLICT(day_of_week) DO UPDATE
         SET is_working_day = 1, start_time = excluded.start_time, end_time = excluded.end_time",
        params![day_of_week, format_hm(start), format_hm(end)],
    )?;
    Ok(())
}

/// Mark a day as off, keeping whatever window it had.
pub fn set_day_off(conn: &Connection, day_of_week: u32) -> AppResult<()> {
    conn.execute(
        "INSERT INTO office_hours (day_of_week, is_working_day)
         VALUES (?1, 0)
         ON CONFLICT(day_of_week) DO UPDATE SET is_working_day = 0",
        params![day_of_week],
    )?;
    Ok(())
}

/// Remove the row for a day entirely (no configuration for that weekday).
pub fn delete_day(conn: &Connection, day_of_week: u32) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM office_hours WHERE day_of_week = ?1",
        params![day_of_week],
    )?)
}
