//! Id-keyed registry of mounted spotlights.

use std::cell::RefCell;

use tracing::debug;

use crate::model::{SpotlightError, SpotlightId};
use crate::spotlight::Spotlight;

/// Lookup table of every mounted [`Spotlight`], keyed by id.
///
/// Registration order is preserved, so [`ids`](SpotlightRegistry::ids)
/// reports spotlights in the order they were mounted. Ids are unique:
/// registering under a taken id fails with
/// [`SpotlightError::DuplicateId`] and leaves the original untouched.
///
/// The registry hands out clones of the registered handles; a spotlight
/// stays alive at least as long as its registration.
#[derive(Debug, Default)]
pub struct SpotlightRegistry {
    entries: RefCell<Vec<(SpotlightId, Spotlight)>>,
}

impl SpotlightRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `spotlight` under its id.
    ///
    /// # Errors
    ///
    /// Returns [`SpotlightError::DuplicateId`] when the id is already
    /// taken. The existing registration is kept as-is.
    pub fn register(&self, spotlight: &Spotlight) -> Result<(), SpotlightError> {
        let id = spotlight.id().clone();
        let mut entries = self.entries.borrow_mut();
        if entries.iter().any(|(existing, _)| *existing == id) {
            return Err(SpotlightError::DuplicateId { id });
        }
        debug!(id = %id, "registered spotlight");
        entries.push((id, spotlight.clone()));
        Ok(())
    }

    /// Removes the registration under `id`, if there is one.
    ///
    /// Unknown ids are ignored so teardown paths can call this
    /// unconditionally.
    pub fn deregister(&self, id: &str) {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(existing, _)| existing.as_str() != id);
        if entries.len() < before {
            debug!(id, "deregistered spotlight");
        }
    }

    /// The spotlight registered under `id`, if any.
    pub fn lookup(&self, id: &str) -> Option<Spotlight> {
        self.entries
            .borrow()
            .iter()
            .find(|(existing, _)| existing.as_str() == id)
            .map(|(_, spotlight)| spotlight.clone())
    }

    /// Ids of every registered spotlight, oldest first.
    pub fn ids(&self) -> Vec<SpotlightId> {
        self.entries
            .borrow()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Number of registered spotlights.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
