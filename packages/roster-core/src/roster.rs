//! Roster container holding one store per entity kind.

use crate::entity::EntityKind;
use crate::store::EntityStore;

/// Top-level container for the service's entity stores.
///
/// Constructed once at startup and shared behind an `Arc`. Each kind gets
/// its own store with an independent id counter; data is ephemeral by
/// design and dropped with the process.
#[derive(Debug)]
pub struct Roster {
    students: EntityStore,
    teachers: EntityStore,
}

impl Roster {
    /// Creates a roster with one empty store per kind.
    pub fn new() -> Self {
        Self {
            students: EntityStore::new(EntityKind::Student),
            teachers: EntityStore::new(EntityKind::Teacher),
        }
    }

    /// Returns the store for the given kind.
    pub fn store(&self, kind: EntityKind) -> &EntityStore {
        match kind {
            EntityKind::Student => &self.students,
            EntityKind::Teacher => &self.teachers,
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
