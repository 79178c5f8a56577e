use crate::errors::{AppError, AppResult, is_unique_violation};
use crate::models::employee::{Account, Employee};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_employee(conn: &Connection, id: &str, full_name: &str) -> AppResult<Employee> {
    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO employees (id, full_name, created_at) VALUES (?1, ?2, ?3)",
        params![id, full_name, created_at],
    )
    .map_err(|e| {
        if matches!(e, rusqlite::Error::SqliteFailure(ref f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        {
            AppError::Other(format!("Employee '{id}' already exists"))
        } else {
            AppError::from(e)
        }
    })?;

    Ok(Employee {
        id: id.to_string(),
        full_name: full_name.to_string(),
        created_at,
    })
}

pub fn employee_exists(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM employees WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}

pub fn load_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT id, full_name, created_at FROM employees ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_account(
    conn: &Connection,
    token: &str,
    email: &str,
    employee_id: Option<&str>,
) -> AppResult<Account> {
    conn.execute(
        "INSERT INTO accounts (token, email, employee_id, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![token, email, employee_id, Local::now().to_rfc3339()],
    )
    .map_err(|e| {
        if is_unique_violation(&e)
            || matches!(e, rusqlite::Error::SqliteFailure(ref f, _)
                if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY)
        {
            AppError::Other("An account with this token already exists".into())
        } else {
            AppError::from(e)
        }
    })?;

    Ok(Account {
        token: token.to_string(),
        email: email.to_string(),
        employee_id: employee_id.map(str::to_string),
    })
}

pub fn find_account_by_token(conn: &Connection, token: &str) -> AppResult<Option<Account>> {
    let mut stmt = conn
        .prepare_cached("SELECT token, email, employee_id FROM accounts WHERE token = ?1")?;

    let account = stmt
        .query_row([token], |row| {
            Ok(Account {
                token: row.get(0)?,
                email: row.get(1)?,
                employee_id: row.get(2)?,
            })
        })
        .optional()?;

    Ok(account)
}
