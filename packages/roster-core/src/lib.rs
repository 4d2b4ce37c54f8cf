//! In-memory entity stores for the roster service.
//!
//! Provides the entity model, a lock-guarded store per entity kind with
//! monotonic id assignment, and the top-level [`Roster`] container the
//! HTTP layer operates on.

pub mod config;
pub mod entity;
pub mod error;
pub mod roster;
pub mod store;

pub use config::RosterConfig;
pub use entity::{Entity, EntityDraft, EntityKind};
pub use error::StoreError;
pub use roster::Roster;
pub use store::EntityStore;
