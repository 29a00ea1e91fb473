//! Voyage-list state shared between the table and the mutation flows.

#[cfg(test)]
#[path = "voyages_test.rs"]
mod voyages_test;

use schema::Voyage;

/// Displayed voyage collection plus fetch status.
#[derive(Clone, Debug, Default)]
pub struct VoyagesState {
    pub items: Vec<Voyage>,
    pub loading: bool,
    pub error: Option<String>,
}

impl VoyagesState {
    /// Replace the collection wholesale with a fetch result.
    ///
    /// The list is never patched incrementally; every successful mutation is
    /// followed by a full re-fetch, so the response is authoritative. A
    /// failed fetch keeps the previously displayed items.
    pub fn apply_fetch(&mut self, result: Result<Vec<Voyage>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}
