//! In-memory entity store with monotonic id assignment.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::entity::{Entity, EntityDraft, EntityKind};
use crate::error::StoreError;

/// Mutable store state. Kept behind one lock so id assignment serializes
/// with insertion.
#[derive(Debug, Default)]
struct StoreState {
    /// Map of id to entity. Ids are assigned monotonically, so id-order
    /// iteration equals insertion-order iteration.
    items: BTreeMap<u64, Entity>,
    /// Next id to assign, starting at 1. Never reused after deletion.
    next_id: u64,
}

/// In-memory store for one entity kind.
///
/// Readers take snapshots; writers hold the lock only for the duration of
/// one operation. All operations complete in time bounded by the number of
/// stored entities.
#[derive(Debug)]
pub struct EntityStore {
    kind: EntityKind,
    state: RwLock<StoreState>,
}

impl EntityStore {
    /// Creates an empty store for the given kind.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            state: RwLock::new(StoreState {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the kind this store holds.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns a snapshot of all entities in insertion order.
    ///
    /// # Returns
    /// `Result<Vec<Entity>, StoreError>` containing the snapshot; empty
    /// when the store is empty.
    pub fn list(&self) -> Result<Vec<Entity>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.items.values().cloned().collect())
    }

    /// Looks up an entity by id.
    ///
    /// # Arguments
    /// * `id` - Entity id
    ///
    /// # Returns
    /// `Result<Entity, StoreError>` with `NotFound` when the id is absent.
    pub fn get(&self, id: u64) -> Result<Entity, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        state
            .items
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: self.kind,
                id,
            })
    }

    /// Inserts a new entity, assigning it the next id.
    ///
    /// # Arguments
    /// * `draft` - Name and email for the new entity
    ///
    /// # Returns
    /// `Result<Entity, StoreError>` containing the stored entity with its
    /// id populated.
    pub fn create(&self, draft: EntityDraft) -> Result<Entity, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = state.next_id;
        state.next_id += 1;
        let entity = Entity {
            id,
            name: draft.name,
            email: draft.email,
        };
        state.items.insert(id, entity.clone());
        tracing::info!(kind = %self.kind, id, "created entity");
        Ok(entity)
    }

    /// Overwrites the name and email of an existing entity. The id never
    /// changes.
    ///
    /// # Arguments
    /// * `id` - Entity id
    /// * `draft` - Replacement name and email
    ///
    /// # Returns
    /// `Result<Entity, StoreError>` containing the updated entity, or
    /// `NotFound` when the id is absent.
    pub fn update(&self, id: u64, draft: EntityDraft) -> Result<Entity, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        let entity = state.items.get_mut(&id).ok_or(StoreError::NotFound {
            kind: self.kind,
            id,
        })?;
        entity.name = draft.name;
        entity.email = draft.email;
        let updated = entity.clone();
        tracing::info!(kind = %self.kind, id, "updated entity");
        Ok(updated)
    }

    /// Removes an entity by id.
    ///
    /// # Arguments
    /// * `id` - Entity id
    ///
    /// # Returns
    /// `Result<Entity, StoreError>` containing the removed entity, or
    /// `NotFound` when the id is absent.
    pub fn delete(&self, id: u64) -> Result<Entity, StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        let removed = state.items.remove(&id).ok_or(StoreError::NotFound {
            kind: self.kind,
            id,
        })?;
        tracing::info!(kind = %self.kind, id, "deleted entity");
        Ok(removed)
    }
}
