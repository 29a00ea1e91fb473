use super::*;
use time::macros::date;

#[test]
fn fresh_sets_both_dates_to_today() {
    let state = RawFormState::fresh(date!(2024 - 06 - 15));
    assert_eq!(state.departure_date, Some(date!(2024 - 06 - 15)));
    assert_eq!(state.arrival_date, Some(date!(2024 - 06 - 15)));
}

#[test]
fn fresh_opens_a_one_minute_time_window() {
    let state = RawFormState::fresh(date!(2024 - 06 - 15));
    assert_eq!(state.departure_time, "00:00");
    assert_eq!(state.arrival_time, "00:01");
}

#[test]
fn fresh_leaves_ports_vessel_and_unit_types_unselected() {
    let state = RawFormState::fresh(date!(2024 - 06 - 15));
    assert!(state.port_of_loading.is_empty());
    assert!(state.port_of_discharge.is_empty());
    assert!(state.vessel.is_empty());
    assert!(state.unit_types.is_empty());
}
