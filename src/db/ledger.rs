use crate::db::convert;
use crate::errors::AppResult;
use crate::models::overtime_entry::OvertimeEntry;
use crate::models::overtime_status::OvertimeStatus;
use crate::utils::date::DateBounds;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const ENTRY_COLUMNS: &str = "id, employee_id, project_id, date, overtime_type, start_time, end_time,
     total_hours, actual_working_hours, description, status, created_at";

pub fn map_entry(row: &Row) -> rusqlite::Result<OvertimeEntry> {
    Ok(OvertimeEntry {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        project_id: row.get(2)?,
        date: convert::date(row, 3)?,
        overtime_type: convert::overtime_type(row, 4)?,
        start_time: convert::time_of_day(row, 5)?,
        end_time: convert::time_of_day(row, 6)?,
        total_hours: row.get(7)?,
        actual_working_hours: row.get(8)?,
        description: row.get(9)?,
        status: convert::overtime_status(row, 10)?,
        created_at: row.get(11)?,
    })
}

/// Insert a ledger entry and return it with its assigned id.
pub fn insert_entry(conn: &Connection, entry: &OvertimeEntry) -> AppResult<OvertimeEntry> {
    conn.execute(
        "INSERT INTO overtime
            (employee_id, project_id, date, overtime_type, start_time, end_time,
             total_hours, actual_working_hours, description, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            entry.employee_id,
            entry.project_id,
            entry.date_str(),
            entry.overtime_type.to_db_str(),
            entry.start_str(),
            entry.end_str(),
            entry.total_hours,
            entry.actual_working_hours,
            entry.description,
            entry.status.to_db_str(),
            entry.created_at,
        ],
    )?;

    let mut saved = entry.clone();
    saved.id = conn.last_insert_rowid();
    Ok(saved)
}

pub fn find_entry(conn: &Connection, id: i64) -> AppResult<Option<OvertimeEntry>> {
    let sql = format!("SELECT {ENTRY_COLUMNS} FROM overtime WHERE id = ?1");
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_entry).optional()?)
}

/// Entries filtered by employee and inclusive date bounds, oldest first.
pub fn load_entries(
    conn: &Connection,
    employee_id: Option<&str>,
    bounds: Option<DateBounds>,
) -> AppResult<Vec<OvertimeEntry>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(emp) = employee_id {
        clauses.push("employee_id = ?");
        values.push(Value::Text(emp.to_string()));
    }

    if let Some((from, to)) = bounds {
        clauses.push("date BETWEEN ? AND ?");
        values.push(Value::Text(from.format("%Y-%m-%d").to_string()));
        values.push(Value::Text(to.format("%Y-%m-%d").to_string()));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT {ENTRY_COLUMNS} FROM overtime {where_sql} ORDER BY date ASC, start_time ASC, id ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Move an entry out of `pending`. Returns false if it was not pending.
pub fn update_status(conn: &Connection, id: i64, status: OvertimeStatus) -> AppResult<bool> {
    let n = conn.execute(
        "UPDATE overtime SET status = ?1 WHERE id = ?2 AND status = 'pending'",
        params![status.to_db_str(), id],
    )?;
    Ok(n > 0)
}
