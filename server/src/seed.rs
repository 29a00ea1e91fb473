//! Seed reference data: the vessel fleet and the unit-type catalog.
//!
//! The catalog intentionally exceeds the five-distinct-unit-types minimum a
//! voyage must reference, so a fresh instance can always create voyages.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use schema::{UnitType, Vessel};
use uuid::Uuid;

use crate::state::Store;

/// Build the initial store: seeded reference data, no voyages.
#[must_use]
pub fn store() -> Store {
    Store {
        vessels: vessels(),
        unit_types: unit_types(),
        voyages: Vec::new(),
    }
}

fn vessels() -> Vec<Vessel> {
    ["Crown Seaways", "Pearl Seaways", "Aura Seaways", "Luna Seaways"]
        .into_iter()
        .map(|name| Vessel {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
        })
        .collect()
}

fn unit_types() -> Vec<UnitType> {
    [
        ("Trailer", 13.6),
        ("Container 20ft", 6.1),
        ("Container 40ft", 12.2),
        ("Double trailer", 18.75),
        ("Lorry", 10.0),
        ("Van", 5.5),
        ("Machinery", 8.0),
        ("Car", 4.5),
    ]
    .into_iter()
    .map(|(name, default_length)| UnitType {
        id: Uuid::new_v4().to_string(),
        name: name.to_owned(),
        default_length,
    })
    .collect()
}
