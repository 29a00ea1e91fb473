use super::*;
use time::macros::{date, datetime};

fn unit_type_ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("ut-{i}")).collect()
}

fn valid_form() -> RawFormState {
    RawFormState {
        departure_date: Some(date!(2024 - 01 - 02)),
        departure_time: "10:00".to_owned(),
        arrival_date: Some(date!(2024 - 01 - 03)),
        arrival_time: "08:30".to_owned(),
        port_of_loading: "Oslo".to_owned(),
        port_of_discharge: "Copenhagen".to_owned(),
        vessel: "vessel-1".to_owned(),
        unit_types: unit_type_ids(5),
    }
}

fn messages_for(errors: &[FieldError], field: Field) -> Vec<&str> {
    errors
        .iter()
        .filter(|e| e.field == field)
        .map(|e| e.message.as_str())
        .collect()
}

// =============================================================
// Valid draft
// =============================================================

#[test]
fn valid_form_yields_candidate_with_merged_timestamps() {
    let candidate = validate(&valid_form()).unwrap();
    assert_eq!(candidate.departure, datetime!(2024-01-02 10:00 UTC));
    assert_eq!(candidate.arrival, datetime!(2024-01-03 08:30 UTC));
}

#[test]
fn valid_form_carries_trimmed_fields_through() {
    let mut form = valid_form();
    form.port_of_loading = "  Oslo  ".to_owned();
    form.vessel = " vessel-1 ".to_owned();
    let candidate = validate(&form).unwrap();
    assert_eq!(candidate.port_of_loading, "Oslo");
    assert_eq!(candidate.port_of_discharge, "Copenhagen");
    assert_eq!(candidate.vessel, "vessel-1");
    assert_eq!(candidate.unit_types, unit_type_ids(5));
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn missing_departure_date_is_reported() {
    let mut form = valid_form();
    form.departure_date = None;
    let errors = validate(&form).unwrap_err();
    assert!(!messages_for(&errors, Field::DepartureDate).is_empty());
}

#[test]
fn malformed_time_is_reported() {
    let mut form = valid_form();
    form.departure_time = "1:00".to_owned();
    let errors = validate(&form).unwrap_err();
    assert!(!messages_for(&errors, Field::DepartureTime).is_empty());
}

#[test]
fn time_with_seconds_still_matches() {
    let mut form = valid_form();
    form.departure_time = "10:00:30".to_owned();
    assert!(validate(&form).is_ok());
}

#[test]
fn whitespace_only_port_of_loading_is_reported() {
    let mut form = valid_form();
    form.port_of_loading = "   ".to_owned();
    let errors = validate(&form).unwrap_err();
    assert!(!messages_for(&errors, Field::PortOfLoading).is_empty());
}

#[test]
fn empty_vessel_is_reported() {
    let mut form = valid_form();
    form.vessel = String::new();
    let errors = validate(&form).unwrap_err();
    assert!(!messages_for(&errors, Field::Vessel).is_empty());
}

#[test]
fn fewer_than_five_unit_types_fails_even_when_rest_is_valid() {
    let mut form = valid_form();
    form.unit_types = unit_type_ids(4);
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::UnitTypes);
}

#[test]
fn duplicate_unit_types_do_not_count_toward_the_minimum() {
    let mut form = valid_form();
    form.unit_types = vec!["ut-0".to_owned(); 6];
    let errors = validate(&form).unwrap_err();
    assert_eq!(errors[0].field, Field::UnitTypes);
}

// =============================================================
// Cross-field schedule rule
// =============================================================

#[test]
fn arrival_before_departure_attaches_error_to_arrival_date() {
    let mut form = valid_form();
    form.departure_date = Some(date!(2024 - 01 - 02));
    form.departure_time = "10:00".to_owned();
    form.arrival_date = Some(date!(2024 - 01 - 01));
    form.arrival_time = "09:00".to_owned();
    let errors = validate(&form).unwrap_err();
    assert_eq!(
        messages_for(&errors, Field::ArrivalDate),
        vec![ARRIVAL_BEFORE_DEPARTURE]
    );
}

#[test]
fn equal_timestamps_are_rejected() {
    let mut form = valid_form();
    form.arrival_date = form.departure_date;
    form.arrival_time = form.departure_time.clone();
    let errors = validate(&form).unwrap_err();
    assert_eq!(
        messages_for(&errors, Field::ArrivalDate),
        vec![ARRIVAL_BEFORE_DEPARTURE]
    );
}

#[test]
fn schedule_check_uses_merged_times_on_the_same_day() {
    let mut form = valid_form();
    form.arrival_date = form.departure_date;
    form.departure_time = "10:00".to_owned();
    form.arrival_time = "10:01".to_owned();
    assert!(validate(&form).is_ok());
}

// =============================================================
// Aggregation
// =============================================================

#[test]
fn all_violations_are_reported_together() {
    let form = RawFormState {
        departure_date: Some(date!(2024 - 01 - 02)),
        departure_time: "xx".to_owned(),
        arrival_date: Some(date!(2024 - 01 - 01)),
        arrival_time: "09:00".to_owned(),
        port_of_loading: String::new(),
        port_of_discharge: " ".to_owned(),
        vessel: String::new(),
        unit_types: Vec::new(),
    };
    let errors = validate(&form).unwrap_err();
    for field in [
        Field::DepartureTime,
        Field::PortOfLoading,
        Field::PortOfDischarge,
        Field::Vessel,
        Field::UnitTypes,
        Field::ArrivalDate,
    ] {
        assert!(!messages_for(&errors, field).is_empty(), "missing {field:?}");
    }
}

#[test]
fn missing_dates_skip_the_schedule_check() {
    let mut form = valid_form();
    form.departure_date = None;
    form.arrival_date = None;
    let errors = validate(&form).unwrap_err();
    assert!(messages_for(&errors, Field::ArrivalDate)
        .iter()
        .all(|m| *m != ARRIVAL_BEFORE_DEPARTURE));
}
