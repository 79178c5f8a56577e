use rovertime::core::calculator::description::derive_description;
use rovertime::core::calculator::totals::{break_duration_seconds, compute_totals};
use rovertime::utils::date::resolve_period;
use rovertime::utils::time::parse_utc_offset;

mod common;
use common::ts;

#[test]
fn test_totals_subtract_breaks() {
    let totals = compute_totals(
        &ts("2024-01-01T20:00:00Z"),
        &ts("2024-01-01T22:30:00Z"),
        15 * 60,
    );

    assert_eq!(totals.total_seconds, 9000);
    assert_eq!(totals.total_break_seconds, 900);
    assert_eq!(totals.actual_working_seconds, 8100);
    assert_eq!(totals.total_hours, 2.5);
    assert_eq!(totals.actual_working_hours, 2.25);
}

#[test]
fn test_totals_round_to_two_decimals() {
    // 1h 20m = 1.3333h
    let totals = compute_totals(&ts("2024-01-01T20:00:00Z"), &ts("2024-01-01T21:20:00Z"), 0);
    assert_eq!(totals.total_hours, 1.33);
    assert_eq!(totals.actual_working_hours, 1.33);
}

#[test]
fn test_totals_never_negative() {
    let totals = compute_totals(
        &ts("2024-01-01T20:00:00Z"),
        &ts("2024-01-01T20:10:00Z"),
        3600,
    );
    assert_eq!(totals.actual_working_seconds, 0);
    assert_eq!(totals.actual_working_hours, 0.0);

    let backwards = compute_totals(&ts("2024-01-01T20:00:00Z"), &ts("2024-01-01T19:00:00Z"), 0);
    assert_eq!(backwards.total_seconds, 0);
}

#[test]
fn test_break_duration_truncates_and_clamps() {
    assert_eq!(
        break_duration_seconds(&ts("2024-01-01T20:00:00Z"), &ts("2024-01-01T20:05:30.900Z")),
        330
    );
    assert_eq!(
        break_duration_seconds(&ts("2024-01-01T20:00:00Z"), &ts("2024-01-01T19:59:00Z")),
        0
    );
}

#[test]
fn test_description_rules() {
    assert_eq!(
        derive_description(None, Some("Website"), Some("fix login")),
        Some("Website - fix login".to_string())
    );
    assert_eq!(
        derive_description(None, Some("Website"), None),
        Some("Website".to_string())
    );
    // A linked project id wins over the free-text name
    assert_eq!(
        derive_description(Some(1), Some("Website"), Some("fix login")),
        Some("fix login".to_string())
    );
    assert_eq!(derive_description(Some(1), None, None), None);
    assert_eq!(derive_description(None, None, Some("memo")), Some("memo".to_string()));
}

#[test]
fn test_description_ignores_blank_fields() {
    assert_eq!(
        derive_description(None, Some("   "), Some("memo")),
        Some("memo".to_string())
    );
    assert_eq!(
        derive_description(None, Some("Website"), Some("  ")),
        Some("Website".to_string())
    );
    assert_eq!(derive_description(None, Some(""), Some("")), None);
}

#[test]
fn test_period_resolution() {
    assert!(resolve_period(None).unwrap().is_none());
    assert!(resolve_period(Some("all")).unwrap().is_none());

    let (from, to) = resolve_period(Some("2024-02")).unwrap().unwrap();
    assert_eq!(from.to_string(), "2024-02-01");
    assert_eq!(to.to_string(), "2024-02-29");

    let (from, to) = resolve_period(Some("2024-01:2024-03")).unwrap().unwrap();
    assert_eq!(from.to_string(), "2024-01-01");
    assert_eq!(to.to_string(), "2024-03-31");

    assert!(resolve_period(Some("2024-03:2024-01")).is_err());
    assert!(resolve_period(Some("soon")).is_err());
}

#[test]
fn test_utc_offsets() {
    assert_eq!(parse_utc_offset("+09:00").unwrap().local_minus_utc(), 9 * 3600);
    assert_eq!(parse_utc_offset("-05:30").unwrap().local_minus_utc(), -(5 * 3600 + 1800));
    assert_eq!(parse_utc_offset("Z").unwrap().local_minus_utc(), 0);
    assert!(parse_utc_offset("nine").is_err());
}
