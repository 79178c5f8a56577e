use chrono::{NaiveDate, NaiveTime};
use rovertime::core::ledger::LedgerLogic;
use rovertime::db::employees::insert_employee;
use rovertime::db::ledger::insert_entry;
use rovertime::db::pool::DbPool;
use rovertime::errors::AppError;
use rovertime::models::overtime_entry::OvertimeEntry;
use rovertime::models::overtime_status::OvertimeStatus;
use rovertime::models::overtime_type::OvertimeType;

mod common;
use common::{EMPLOYEE, seeded_pool};

fn add_entry(pool: &DbPool, employee: &str, date: &str, hours: f64) -> OvertimeEntry {
    let entry = OvertimeEntry::new(
        employee.to_string(),
        None,
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        OvertimeType::Tracking,
        NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        hours,
        hours,
        Some("release prep".to_string()),
    );
    insert_entry(&pool.conn, &entry).unwrap()
}

fn ledger_pool() -> DbPool {
    let pool = seeded_pool();
    insert_employee(&pool.conn, "E2", "Sam Sample").unwrap();

    add_entry(&pool, EMPLOYEE, "2024-01-15", 1.0);
    add_entry(&pool, EMPLOYEE, "2024-02-03", 2.5);
    add_entry(&pool, "E2", "2024-02-10", 0.75);
    add_entry(&pool, EMPLOYEE, "2025-01-02", 1.25);
    pool
}

#[test]
fn test_list_filters() {
    let pool = ledger_pool();

    assert_eq!(LedgerLogic::list(&pool, None, None).unwrap().len(), 4);
    assert_eq!(LedgerLogic::list(&pool, Some(EMPLOYEE), None).unwrap().len(), 3);
    assert_eq!(LedgerLogic::list(&pool, None, Some("2024-02")).unwrap().len(), 2);
    assert_eq!(LedgerLogic::list(&pool, Some("E2"), Some("2024")).unwrap().len(), 1);
    assert_eq!(LedgerLogic::list(&pool, None, Some("2024:2025")).unwrap().len(), 4);
    assert!(LedgerLogic::list(&pool, Some("E3"), Some("all")).unwrap().is_empty());
}

#[test]
fn test_list_is_ordered_by_date() {
    let pool = ledger_pool();

    let dates: Vec<String> = LedgerLogic::list(&pool, None, None)
        .unwrap()
        .iter()
        .map(|e| e.date_str())
        .collect();
    assert_eq!(dates, ["2024-01-15", "2024-02-03", "2024-02-10", "2025-01-02"]);
}

#[test]
fn test_total_hours() {
    let pool = ledger_pool();
    let entries = LedgerLogic::list(&pool, Some(EMPLOYEE), None).unwrap();

    let (total, worked) = LedgerLogic::total_hours(&entries);
    assert!((total - 4.75).abs() < 1e-9);
    assert!((worked - 4.75).abs() < 1e-9);
}

#[test]
fn test_review_moves_out_of_pending_once() {
    let pool = ledger_pool();

    let approved = LedgerLogic::review(&pool, 1, OvertimeStatus::Approved).unwrap();
    assert_eq!(approved.status, OvertimeStatus::Approved);

    let err = LedgerLogic::review(&pool, 1, OvertimeStatus::Rejected).unwrap_err();
    assert!(matches!(err, AppError::AlreadyReviewed(1)));

    let rejected = LedgerLogic::review(&pool, 2, OvertimeStatus::Rejected).unwrap();
    assert_eq!(rejected.status, OvertimeStatus::Rejected);

    let err = LedgerLogic::review(&pool, 99, OvertimeStatus::Approved).unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(99)));
    assert_eq!(err.status().as_u16(), 404);

    assert!(LedgerLogic::review(&pool, 3, OvertimeStatus::Pending).is_err());
}
