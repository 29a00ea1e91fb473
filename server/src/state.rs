//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! store is one `RwLock`-guarded struct: reference data is immutable after
//! seeding and the voyage list lives only for the process lifetime —
//! persistence is deliberately out of scope.

use std::sync::Arc;

use schema::{UnitType, Vessel, Voyage};
use tokio::sync::RwLock;

/// In-memory backing store for the REST endpoints.
#[derive(Debug, Default)]
pub struct Store {
    pub vessels: Vec<Vessel>,
    pub unit_types: Vec<UnitType>,
    pub voyages: Vec<Voyage>,
}

/// Cloneable handle shared across handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    /// Fresh state with seeded reference data and no voyages.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            store: Arc::new(RwLock::new(crate::seed::store())),
        }
    }
}
