//! Reference-data routes: vessels and unit types.

use axum::extract::State;
use axum::response::Json;
use schema::{UnitType, Vessel};

use crate::state::AppState;

/// `GET /api/vessel/getAll` — every known vessel.
pub async fn all_vessels(State(state): State<AppState>) -> Json<Vec<Vessel>> {
    Json(state.store.read().await.vessels.clone())
}

/// `GET /api/unitType/getAll` — every known unit type.
pub async fn all_unit_types(State(state): State<AppState>) -> Json<Vec<UnitType>> {
    Json(state.store.read().await.unit_types.clone())
}
