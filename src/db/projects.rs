use crate::errors::AppResult;
use crate::models::project::{Project, ProjectSummary};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

fn map_project(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        code: row.get("code")?,
        status: row.get("status")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_project(conn: &Connection, name: &str, code: Option<&str>) -> AppResult<Project> {
    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO projects (name, code, status, created_at) VALUES (?1, ?2, 'active', ?3)",
        params![name, code, created_at],
    )?;

    Ok(Project {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        code: code.map(str::to_string),
        status: "active".to_string(),
        created_at,
    })
}

pub fn find_project(conn: &Connection, id: i64) -> AppResult<Option<Project>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, code, status, created_at FROM projects WHERE id = ?1",
    )?;
    Ok(stmt.query_row([id], map_project).optional()?)
}

pub fn find_summary(conn: &Connection, id: i64) -> AppResult<Option<ProjectSummary>> {
    Ok(find_project(conn, id)?.as_ref().map(ProjectSummary::from))
}

pub fn load_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt =
        conn.prepare("SELECT id, name, code, status, created_at FROM projects ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_project)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
