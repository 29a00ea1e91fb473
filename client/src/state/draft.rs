//! Draft validation: raw form fields to a submit-ready voyage candidate.
//!
//! DESIGN
//! ======
//! Rules are an explicit list of pure checks, each tagging its failure with
//! the field it belongs to so the form can render messages inline. All
//! violations are collected in one pass; validation never stops at the first
//! failure. No schema-validation dependency is involved.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::HashSet;

use schema::VoyageCandidate;

use super::form::RawFormState;
use crate::util::time_merge::merge_time_and_date;

/// Minimum number of distinct unit types a voyage must carry.
pub const MIN_UNIT_TYPES: usize = 5;

/// Cross-field message attached to the arrival date.
pub const ARRIVAL_BEFORE_DEPARTURE: &str = "Arrival must be later than departure";

/// Form fields a validation failure can attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    DepartureDate,
    DepartureTime,
    ArrivalDate,
    ArrivalTime,
    PortOfLoading,
    PortOfDischarge,
    Vessel,
    UnitTypes,
}

/// A single field-tagged validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate `form`, producing either a candidate with merged timestamps and
/// trimmed strings, or every rule violation found.
///
/// The cross-field schedule check runs whenever both dates are present; its
/// failure attaches to the arrival date field. Vessel existence is not
/// checked here — the identifier is resolved server-side.
///
/// # Errors
///
/// Returns the full list of field-tagged violations when any rule fails.
pub fn validate(form: &RawFormState) -> Result<VoyageCandidate, Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.departure_date.is_none() {
        errors.push(FieldError::new(Field::DepartureDate, "Departure date is required"));
    }
    if !is_clock_time(&form.departure_time) {
        errors.push(FieldError::new(Field::DepartureTime, "Time must be HH:MM"));
    }
    if form.arrival_date.is_none() {
        errors.push(FieldError::new(Field::ArrivalDate, "Arrival date is required"));
    }
    if !is_clock_time(&form.arrival_time) {
        errors.push(FieldError::new(Field::ArrivalTime, "Time must be HH:MM"));
    }
    if form.port_of_loading.trim().is_empty() {
        errors.push(FieldError::new(Field::PortOfLoading, "Port of loading is required"));
    }
    if form.port_of_discharge.trim().is_empty() {
        errors.push(FieldError::new(Field::PortOfDischarge, "Port of discharge is required"));
    }
    if form.vessel.trim().is_empty() {
        errors.push(FieldError::new(Field::Vessel, "Vessel is required"));
    }

    let distinct: HashSet<&str> = form.unit_types.iter().map(String::as_str).collect();
    if distinct.len() < MIN_UNIT_TYPES {
        errors.push(FieldError::new(
            Field::UnitTypes,
            format!("Select at least {MIN_UNIT_TYPES} unit types"),
        ));
    }

    let merged = match (form.departure_date, form.arrival_date) {
        (Some(departure_date), Some(arrival_date)) => {
            let departure = merge_time_and_date(&form.departure_time, departure_date);
            let arrival = merge_time_and_date(&form.arrival_time, arrival_date);
            if departure < arrival {
                Some((departure, arrival))
            } else {
                errors.push(FieldError::new(Field::ArrivalDate, ARRIVAL_BEFORE_DEPARTURE));
                None
            }
        }
        _ => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }
    // With no errors both dates were present, so the merge happened.
    let Some((departure, arrival)) = merged else {
        return Err(errors);
    };

    Ok(VoyageCandidate {
        departure: departure.assume_utc(),
        arrival: arrival.assume_utc(),
        port_of_loading: form.port_of_loading.trim().to_owned(),
        port_of_discharge: form.port_of_discharge.trim().to_owned(),
        vessel: form.vessel.trim().to_owned(),
        unit_types: form.unit_types.clone(),
    })
}

/// Unanchored `\d{2}:\d{2}` check, matching the backend's expectation without
/// pulling in a regex engine.
fn is_clock_time(value: &str) -> bool {
    value.as_bytes().windows(5).any(|window| {
        window[0].is_ascii_digit()
            && window[1].is_ascii_digit()
            && window[2] == b':'
            && window[3].is_ascii_digit()
            && window[4].is_ascii_digit()
    })
}
