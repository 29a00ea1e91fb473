//! Raw creation-form state for one open voyage panel.
//!
//! DESIGN
//! ======
//! Field values live in one serializable struct instead of being scattered
//! across widget-local signals, so the draft validator and its tests see the
//! exact same data the widgets edit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::{Deserialize, Serialize};
use time::Date;

/// Unvalidated field values, mutated field-by-field as the user types.
///
/// Owned by a single open creation panel and discarded on submit or cancel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawFormState {
    pub departure_date: Option<Date>,
    pub departure_time: String,
    pub arrival_date: Option<Date>,
    pub arrival_time: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    /// Identifier of the selected vessel, or empty when unselected.
    pub vessel: String,
    /// Identifiers of the selected unit types, in selection order.
    pub unit_types: Vec<String>,
}

impl RawFormState {
    /// Fresh state for a newly opened panel: both dates set to `today`, a
    /// one-minute default time window, and everything else unselected.
    #[must_use]
    pub fn fresh(today: Date) -> Self {
        Self {
            departure_date: Some(today),
            departure_time: "00:00".to_owned(),
            arrival_date: Some(today),
            arrival_time: "00:01".to_owned(),
            port_of_loading: String::new(),
            port_of_discharge: String::new(),
            vessel: String::new(),
            unit_types: Vec::new(),
        }
    }
}
