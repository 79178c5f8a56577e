#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset, Utc};
use rovertime::core::machine::{StartRequest, TrackAction};
use rovertime::db::employees::{insert_account, insert_employee};
use rovertime::db::migrate::init_db;
use rovertime::db::pool::DbPool;
use rovertime::db::projects::insert_project;
use rovertime::models::overtime_type::OvertimeType;
use rovertime::utils::clock::Moment;
use tempfile::TempDir;

pub const EMPLOYEE: &str = "E1";
pub const TOKEN: &str = "token-e1";

/// Monday 2024-01-01, after the seeded 09:00-18:00 window.
pub const MONDAY_EVENING: &str = "2024-01-01T20:00:00Z";
/// Monday 2024-01-01, inside office hours.
pub const MONDAY_NOON: &str = "2024-01-01T12:00:00Z";

pub fn rti() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Fresh on-disk database path inside a temp dir that lives as long as the guard.
pub fn setup_test_db() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rovertime_test.sqlite");
    (dir, path.to_string_lossy().to_string())
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC3339")
        .with_timezone(&Utc)
}

pub fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).expect("offset")
}

pub fn at(s: &str) -> Moment {
    Moment::new(ts(s), utc())
}

/// In-memory database with the schema, seeded office hours, employee E1
/// (token `token-e1`) and project #1.
pub fn seeded_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    seed(&pool);
    pool
}

pub fn seed(pool: &DbPool) {
    init_db(&pool.conn).expect("migrate");
    insert_employee(&pool.conn, EMPLOYEE, "Erin Example").expect("employee");
    insert_account(&pool.conn, TOKEN, "e1@example.com", Some(EMPLOYEE)).expect("account");
    insert_project(&pool.conn, "Billing revamp", Some("BILL")).expect("project");
}

/// Seed an on-disk database for the HTTP and CLI tests.
pub fn seed_file(db_path: &str) {
    let pool = DbPool::new(db_path).expect("open db");
    seed(&pool);
    insert_account(&pool.conn, "token-orphan", "orphan@example.com", None).expect("account");
}

pub fn start(overtime_type: OvertimeType) -> TrackAction {
    TrackAction::Start(StartRequest {
        overtime_type,
        project_id: None,
        project_name: None,
        memo: None,
    })
}

pub fn start_with(
    project_id: Option<i64>,
    project_name: Option<&str>,
    memo: Option<&str>,
) -> TrackAction {
    TrackAction::Start(StartRequest {
        overtime_type: OvertimeType::NewTasks,
        project_id,
        project_name: project_name.map(str::to_string),
        memo: memo.map(str::to_string),
    })
}
