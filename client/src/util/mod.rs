//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate time handling and browser/environment concerns
//! from page and component logic to improve reuse and testability.

pub mod clock;
pub mod format;
pub mod time_merge;
