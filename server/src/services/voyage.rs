//! Voyage service — list, create, and delete against the in-memory store.
//!
//! ERROR HANDLING
//! ==============
//! Expected failures are a closed enum mapped to HTTP statuses at the route
//! layer. Candidate problems the client should have caught (unknown vessel,
//! too few unit types, inverted schedule) are re-checked here rather than
//! trusted, since any HTTP client can hit these endpoints.

#[cfg(test)]
#[path = "voyage_test.rs"]
mod voyage_test;

use schema::{UnitType, Voyage, VoyageCandidate};
use tracing::info;
use uuid::Uuid;

use crate::state::Store;

/// Minimum number of distinct unit types a voyage must reference.
pub const MIN_UNIT_TYPES: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum VoyageError {
    #[error("voyage not found: {0}")]
    NotFound(String),
    #[error("unknown vessel: {0}")]
    UnknownVessel(String),
    #[error("unknown unit type: {0}")]
    UnknownUnitType(String),
    #[error("voyage requires at least {MIN_UNIT_TYPES} distinct unit types")]
    TooFewUnitTypes,
    #[error("arrival must be later than departure")]
    InvalidSchedule,
}

/// All voyages, most recent departure first.
#[must_use]
pub fn list(store: &Store) -> Vec<Voyage> {
    let mut voyages = store.voyages.clone();
    voyages.sort_by_key(|voyage| std::cmp::Reverse(voyage.scheduled_departure));
    voyages
}

/// Resolve a candidate against reference data and append the new voyage.
///
/// Duplicate unit-type identifiers collapse before the minimum is checked.
///
/// # Errors
///
/// Rejects unknown vessel or unit-type identifiers, fewer than
/// [`MIN_UNIT_TYPES`] distinct unit types, and a departure that is not
/// strictly before the arrival.
pub fn create(store: &mut Store, candidate: VoyageCandidate) -> Result<Voyage, VoyageError> {
    if candidate.departure >= candidate.arrival {
        return Err(VoyageError::InvalidSchedule);
    }

    let vessel = store
        .vessels
        .iter()
        .find(|vessel| vessel.id == candidate.vessel)
        .cloned()
        .ok_or_else(|| VoyageError::UnknownVessel(candidate.vessel.clone()))?;

    let mut unit_types: Vec<UnitType> = Vec::new();
    for id in &candidate.unit_types {
        let unit = store
            .unit_types
            .iter()
            .find(|unit| unit.id == *id)
            .cloned()
            .ok_or_else(|| VoyageError::UnknownUnitType(id.clone()))?;
        if !unit_types.iter().any(|known| known.id == unit.id) {
            unit_types.push(unit);
        }
    }
    if unit_types.len() < MIN_UNIT_TYPES {
        return Err(VoyageError::TooFewUnitTypes);
    }

    let voyage = Voyage {
        id: Uuid::new_v4().to_string(),
        scheduled_departure: candidate.departure,
        scheduled_arrival: candidate.arrival,
        port_of_loading: candidate.port_of_loading,
        port_of_discharge: candidate.port_of_discharge,
        vessel,
        unit_types,
    };
    store.voyages.push(voyage.clone());
    info!(voyage_id = %voyage.id, vessel = %voyage.vessel.name, "voyage created");
    Ok(voyage)
}

/// Remove a voyage by id.
///
/// # Errors
///
/// Returns [`VoyageError::NotFound`] when no voyage carries `id`.
pub fn delete(store: &mut Store, id: &str) -> Result<(), VoyageError> {
    let before = store.voyages.len();
    store.voyages.retain(|voyage| voyage.id != id);
    if store.voyages.len() == before {
        return Err(VoyageError::NotFound(id.to_owned()));
    }
    info!(voyage_id = %id, "voyage deleted");
    Ok(())
}
