//! Store error types.

use thiserror::Error;

use crate::entity::EntityKind;

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entity with the given id exists in the store
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,
}
