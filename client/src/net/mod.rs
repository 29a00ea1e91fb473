//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the five backend endpoints; wire types live in the shared
//! `schema` crate so the server deserializes exactly what the client sends.

pub mod api;
