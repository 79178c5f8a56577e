use chrono::{NaiveDate, NaiveTime};
use rovertime::core::admission::{OfficeCalendar, is_overtime_eligible};
use rovertime::core::office_hours::OfficeHoursLogic;
use rovertime::models::office_hours::{OfficeHoursDay, parse_day};

mod common;
use common::seeded_pool;

fn hm(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

fn working(dow: u32) -> OfficeHoursDay {
    OfficeHoursDay {
        day_of_week: dow,
        is_working_day: true,
        start_time: hm(9, 0, 0),
        end_time: hm(18, 0, 0),
    }
}

#[test]
fn test_working_day_window_boundaries() {
    let day = working(1);

    assert!(is_overtime_eligible(Some(&day), hm(8, 59, 0)));
    assert!(!is_overtime_eligible(Some(&day), hm(9, 0, 0)));
    assert!(!is_overtime_eligible(Some(&day), hm(12, 30, 0)));
    assert!(!is_overtime_eligible(Some(&day), hm(17, 59, 59)));
    assert!(is_overtime_eligible(Some(&day), hm(18, 0, 0)));
    assert!(is_overtime_eligible(Some(&day), hm(23, 59, 0)));
}

#[test]
fn test_seconds_are_ignored() {
    let day = working(1);

    // 08:59:59 is still 08:59
    assert!(is_overtime_eligible(Some(&day), hm(8, 59, 59)));
}

#[test]
fn test_off_day_and_missing_row_are_eligible() {
    let off = OfficeHoursDay {
        is_working_day: false,
        ..working(6)
    };

    assert!(is_overtime_eligible(Some(&off), hm(12, 0, 0)));
    assert!(is_overtime_eligible(None, hm(12, 0, 0)));
}

#[test]
fn test_seeded_calendar() {
    let pool = seeded_pool();
    let cal = OfficeCalendar::load(&pool.conn).unwrap();

    assert_eq!(cal.days().len(), 7);

    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();

    assert!(!cal.is_overtime_eligible(monday.and_hms_opt(10, 0, 0).unwrap()));
    assert!(cal.is_overtime_eligible(monday.and_hms_opt(19, 0, 0).unwrap()));
    assert!(cal.is_overtime_eligible(saturday.and_hms_opt(10, 0, 0).unwrap()));
}

#[test]
fn test_office_hours_edits() {
    let pool = seeded_pool();
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    // Monday becomes 10:00-16:00
    assert_eq!(OfficeHoursLogic::set(&pool, "mon", "10:00", "16:00").unwrap(), 1);
    let cal = OfficeCalendar::load(&pool.conn).unwrap();
    assert!(cal.is_overtime_eligible(monday.and_hms_opt(9, 30, 0).unwrap()));
    assert!(!cal.is_overtime_eligible(monday.and_hms_opt(15, 59, 0).unwrap()));

    // Day off
    OfficeHoursLogic::off(&pool, "1").unwrap();
    let cal = OfficeCalendar::load(&pool.conn).unwrap();
    assert!(cal.is_overtime_eligible(monday.and_hms_opt(12, 0, 0).unwrap()));

    // Cleared
    let (dow, removed) = OfficeHoursLogic::clear(&pool, "Monday").unwrap();
    assert_eq!(dow, 1);
    assert!(removed);
    let cal = OfficeCalendar::load(&pool.conn).unwrap();
    assert!(cal.day(1).is_none());

    let (_, removed_again) = OfficeHoursLogic::clear(&pool, "Monday").unwrap();
    assert!(!removed_again);
}

#[test]
fn test_office_hours_rejects_bad_input() {
    let pool = seeded_pool();

    assert!(OfficeHoursLogic::set(&pool, "mon", "18:00", "09:00").is_err());
    assert!(OfficeHoursLogic::set(&pool, "mon", "9am", "18:00").is_err());
    assert!(parse_day("7").is_err());
    assert!(parse_day("mo").is_err());
    assert_eq!(parse_day("sun").unwrap(), 0);
    assert_eq!(parse_day("Saturday").unwrap(), 6);
}
