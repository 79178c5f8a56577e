use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rovertime::db::log::load_log;
use rovertime::db::pool::DbPool;
use std::fs;

mod common;
use common::{MONDAY_EVENING, MONDAY_NOON, rti, setup_test_db};

fn init(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rti()
        .args(["--db", db_path, "employee", "add", "E1", "Erin Example"])
        .assert()
        .success();
}

fn track(db_path: &str, now: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    rti()
        .args(["--db", db_path, "--now", now, "track", "--employee", "E1"])
        .args(args)
        .assert()
}

#[test]
fn test_init_seeds_office_hours() {
    let (_dir, db_path) = setup_test_db();
    init(&db_path);

    rti()
        .args(["--db", &db_path, "office-hours", "list"])
        .assert()
        .success()
        .stdout(contains("Monday").and(contains("09:00")).and(contains("off")));
}

#[test]
fn test_track_session_via_cli() {
    let (_dir, db_path) = setup_test_db();
    init(&db_path);

    track(&db_path, MONDAY_NOON, &["start", "--type", "new_tasks"])
        .failure()
        .stderr(contains("outside office hours"));

    track(
        &db_path,
        MONDAY_EVENING,
        &["start", "--type", "new-tasks", "--memo", "hotfix"],
    )
    .success()
    .stdout(contains("started"));

    track(&db_path, "2024-01-01T20:30:00Z", &["status"])
        .success()
        .stdout(contains("running").and(contains("hotfix")));

    track(&db_path, "2024-01-01T21:00:00Z", &["pause"])
        .success()
        .stdout(contains("Break #1"));

    track(&db_path, "2024-01-01T21:05:00Z", &["end"])
        .failure()
        .stderr(contains("Resume it before ending"));

    track(&db_path, "2024-01-01T21:30:00Z", &["resume"])
        .success()
        .stdout(contains("00:30:00"));

    track(&db_path, "2024-01-01T22:00:00Z", &["end"])
        .success()
        .stdout(contains("Overtime #1 recorded for 2024-01-01"));

    track(&db_path, "2024-01-01T22:05:00Z", &["status"])
        .success()
        .stdout(contains("No active overtime session"));

    rti()
        .args(["--db", &db_path, "overtime", "list", "--period", "2024-01"])
        .assert()
        .success()
        .stdout(contains("pending").and(contains("1.50")).and(contains("hotfix")));
}

#[test]
fn test_review_and_export() {
    let (dir, db_path) = setup_test_db();
    init(&db_path);

    track(&db_path, MONDAY_EVENING, &["start", "--type", "tracking"]).success();
    track(&db_path, "2024-01-01T21:00:00Z", &["end"]).success();

    rti()
        .args(["--db", &db_path, "overtime", "approve", "1"])
        .assert()
        .success()
        .stdout(contains("approved"));

    rti()
        .args(["--db", &db_path, "overtime", "reject", "1"])
        .assert()
        .failure()
        .stderr(contains("already been reviewed"));

    let csv_path = dir.path().join("ledger.csv");
    let csv_str = csv_path.to_string_lossy().to_string();
    rti()
        .args([
            "--db", &db_path, "overtime", "export", "--format", "csv", "--file", &csv_str,
            "--force",
        ])
        .assert()
        .success();
    let content = fs::read_to_string(&csv_path).unwrap();
    assert!(content.lines().count() >= 2);
    assert!(content.contains("approved"));

    let json_path = dir.path().join("ledger.json");
    let json_str = json_path.to_string_lossy().to_string();
    rti()
        .args([
            "--db", &db_path, "overtime", "export", "--format", "json", "--file", &json_str,
            "--period", "2024",
        ])
        .assert()
        .success();
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["status"], "approved");
}

#[test]
fn test_office_hours_change_affects_admission() {
    let (_dir, db_path) = setup_test_db();
    init(&db_path);

    rti()
        .args(["--db", &db_path, "office-hours", "off", "monday"])
        .assert()
        .success();

    track(&db_path, MONDAY_NOON, &["start", "--type", "pending_tasks"]).success();
}

#[test]
fn test_track_requires_employee() {
    let (_dir, db_path) = setup_test_db();
    init(&db_path);

    rti()
        .args(["--db", &db_path, "--now", MONDAY_EVENING, "track", "status"])
        .assert()
        .failure()
        .stderr(contains("Employee ID not found"));

    track(&db_path, MONDAY_EVENING, &["start", "--type", "overtime"])
        .failure()
        .stderr(contains("Invalid overtime type"));
}

#[test]
fn test_init_reports_migrations_and_audits_db_path() {
    let (_dir, db_path) = setup_test_db();

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("3 migration(s) applied"));

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("0 migration(s) applied"));

    let pool = DbPool::new(&db_path).unwrap();
    let targets: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "init")
        .map(|r| r.target)
        .collect();
    assert_eq!(targets, [db_path.clone(), db_path]);
}

#[test]
fn test_log_records_operations() {
    let (_dir, db_path) = setup_test_db();
    init(&db_path);

    track(&db_path, MONDAY_EVENING, &["start", "--type", "tracking"]).success();

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("migration_applied")
                .and(contains("init"))
                .and(contains("track_start")),
        );
}
