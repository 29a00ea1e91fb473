//! Plain state containers with pure transitions.
//!
//! DESIGN
//! ======
//! State lives in ordinary structs mutated through small, pure functions;
//! Leptos signals merely wrap them at the component boundary. That keeps the
//! submit pipeline and the mutation bookkeeping testable without a renderer.

pub mod draft;
pub mod form;
pub mod toast;
pub mod voyages;
