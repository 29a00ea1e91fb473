//! Voyage CRUD routes.

#[cfg(test)]
#[path = "voyages_test.rs"]
mod voyages_test;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use schema::{Voyage, VoyageCandidate};
use serde::Deserialize;

use crate::services::voyage::{self, VoyageError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: String,
}

/// `GET /api/voyage/getAll` — the full voyage collection.
pub async fn all_voyages(State(state): State<AppState>) -> Json<Vec<Voyage>> {
    Json(voyage::list(&*state.store.read().await))
}

/// `POST /api/voyage/create` — create a voyage from a candidate.
pub async fn create_voyage(
    State(state): State<AppState>,
    Json(candidate): Json<VoyageCandidate>,
) -> Result<Json<Voyage>, StatusCode> {
    let mut store = state.store.write().await;
    voyage::create(&mut store, candidate)
        .map(Json)
        .map_err(voyage_error_to_status)
}

/// `DELETE /api/voyage/delete?id=<id>` — remove a voyage.
pub async fn delete_voyage(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, StatusCode> {
    let mut store = state.store.write().await;
    voyage::delete(&mut store, &params.id)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(voyage_error_to_status)
}

pub(crate) fn voyage_error_to_status(err: VoyageError) -> StatusCode {
    match err {
        VoyageError::NotFound(_) => StatusCode::NOT_FOUND,
        VoyageError::UnknownVessel(_)
        | VoyageError::UnknownUnitType(_)
        | VoyageError::TooFewUnitTypes
        | VoyageError::InvalidSchedule => StatusCode::BAD_REQUEST,
    }
}
