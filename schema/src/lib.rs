//! Shared voyage-domain DTOs for the client/server boundary.
//!
//! This crate owns the JSON wire representation used by both `server` and
//! `client`. Field names follow the backend's camelCase convention and
//! timestamps travel as ISO-8601 strings in UTC, so serde round-trips stay
//! lossless on either side.


use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A ship entity referenced by voyages, as served by `GET /api/vessel/getAll`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    /// Unique vessel identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A cargo category, as served by `GET /api/unitType/getAll`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitType {
    /// Unique unit-type identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Default unit length in meters; displayed, never computed with.
    pub default_length: f64,
}

/// A persisted voyage, as served by `GET /api/voyage/getAll`.
///
/// Created by the backend; the client only reads these and deletes by `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    /// Unique voyage identifier.
    pub id: String,
    /// Scheduled departure from the port of loading.
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_departure: OffsetDateTime,
    /// Scheduled arrival at the port of discharge.
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_arrival: OffsetDateTime,
    /// Where the voyage begins.
    pub port_of_loading: String,
    /// Where the voyage ends.
    pub port_of_discharge: String,
    /// The vessel sailing this voyage, embedded in full.
    pub vessel: Vessel,
    /// Cargo unit types carried, embedded in full.
    pub unit_types: Vec<UnitType>,
}

/// An unsaved, client-validated voyage ready for `POST /api/voyage/create`.
///
/// Unlike [`Voyage`], `vessel` and `unit_types` carry identifiers rather than
/// embedded records; the server resolves them against its reference data.
/// Constructed transiently at submit time and owned solely by the call that
/// sends it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoyageCandidate {
    /// Merged departure timestamp; strictly earlier than `arrival`.
    #[serde(with = "time::serde::rfc3339")]
    pub departure: OffsetDateTime,
    /// Merged arrival timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub arrival: OffsetDateTime,
    /// Trimmed, non-empty port of loading.
    pub port_of_loading: String,
    /// Trimmed, non-empty port of discharge.
    pub port_of_discharge: String,
    /// Identifier of the chosen vessel.
    pub vessel: String,
    /// Identifiers of the chosen unit types, at least five distinct.
    pub unit_types: Vec<String>,
}
