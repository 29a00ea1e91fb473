use super::*;
use time::macros::date;

// =============================================================
// Well-formed input
// =============================================================

#[test]
fn merge_preserves_calendar_date() {
    let merged = merge_time_and_date("10:30", date!(2024 - 01 - 02));
    assert_eq!(merged.date(), date!(2024 - 01 - 02));
}

#[test]
fn merge_sets_hour_and_minute_with_zero_seconds() {
    let merged = merge_time_and_date("10:30", date!(2024 - 01 - 02));
    assert_eq!(merged.hour(), 10);
    assert_eq!(merged.minute(), 30);
    assert_eq!(merged.second(), 0);
}

#[test]
fn merge_parses_optional_seconds() {
    let merged = merge_time_and_date("10:15:42", date!(2024 - 01 - 02));
    assert_eq!(merged.second(), 42);
}

#[test]
fn merge_accepts_single_digit_fragments() {
    let merged = merge_time_and_date("9:5", date!(2024 - 01 - 02));
    assert_eq!(merged.hour(), 9);
    assert_eq!(merged.minute(), 5);
}

// =============================================================
// Malformed input coerces to zero, never panics
// =============================================================

#[test]
fn merge_coerces_unparseable_hour_to_zero() {
    let merged = merge_time_and_date("ab:12", date!(2024 - 01 - 02));
    assert_eq!(merged.hour(), 0);
    assert_eq!(merged.minute(), 12);
}

#[test]
fn merge_coerces_missing_fragments_to_midnight() {
    let merged = merge_time_and_date("", date!(2024 - 01 - 02));
    assert_eq!(merged.hour(), 0);
    assert_eq!(merged.minute(), 0);
    assert_eq!(merged.second(), 0);
}

#[test]
fn merge_coerces_out_of_range_fragments_to_zero() {
    let merged = merge_time_and_date("25:99", date!(2024 - 01 - 02));
    assert_eq!(merged.hour(), 0);
    assert_eq!(merged.minute(), 0);
}

#[test]
fn merge_ignores_trailing_garbage_fragments() {
    let merged = merge_time_and_date("10:30:xx", date!(2024 - 01 - 02));
    assert_eq!(merged.hour(), 10);
    assert_eq!(merged.minute(), 30);
    assert_eq!(merged.second(), 0);
}
