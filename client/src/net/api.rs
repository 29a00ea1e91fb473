//! REST helpers for the voyage backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since these endpoints are only
//! called from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a user-facing message;
//! callers surface the message in a toast or inline instead of panicking, so
//! one failed request never takes down the page. No retries, no timeouts —
//! the user resubmits manually.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::{UnitType, Vessel, Voyage, VoyageCandidate};

/// Failure message for a rejected creation, surfaced verbatim in a toast.
#[cfg(any(test, feature = "hydrate"))]
const CREATE_FAILED: &str = "New voyage could not be created.";

/// Failure message for a rejected deletion.
#[cfg(any(test, feature = "hydrate"))]
const DELETE_FAILED: &str = "Failed to delete the voyage";

#[cfg(any(test, feature = "hydrate"))]
fn voyage_delete_endpoint(id: &str) -> String {
    format!("/api/voyage/delete?id={id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(fetch_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch all vessels from `GET /api/vessel/getAll`.
///
/// # Errors
///
/// Returns a message when the request fails or the status is non-2xx.
pub async fn fetch_vessels() -> Result<Vec<Vessel>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/vessel/getAll", "vessel").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch all unit types from `GET /api/unitType/getAll`.
///
/// # Errors
///
/// Returns a message when the request fails or the status is non-2xx.
pub async fn fetch_unit_types() -> Result<Vec<UnitType>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/unitType/getAll", "unit type").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the voyage collection from `GET /api/voyage/getAll`.
///
/// # Errors
///
/// Returns a message when the request fails or the status is non-2xx.
pub async fn fetch_voyages() -> Result<Vec<Voyage>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/voyage/getAll", "voyage").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a voyage via `POST /api/voyage/create`.
///
/// # Errors
///
/// Returns the user-facing failure message when the request cannot be sent
/// or the server responds with a non-2xx status.
pub async fn create_voyage(candidate: &VoyageCandidate) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/voyage/create")
            .json(candidate)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(CREATE_FAILED.to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = candidate;
        Err("not available on server".to_owned())
    }
}

/// Delete a voyage via `DELETE /api/voyage/delete?id=<id>`.
///
/// # Errors
///
/// Returns the user-facing failure message when the request cannot be sent
/// or the server responds with a non-2xx status.
pub async fn delete_voyage(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&voyage_delete_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(DELETE_FAILED.to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}
