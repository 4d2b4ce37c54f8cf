//! Entity model shared by both resource kinds.

use serde::{Deserialize, Serialize};

/// A person record held by an [`EntityStore`](crate::store::EntityStore).
///
/// The `id` is assigned by the store on creation and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Store-assigned identifier, unique within one store, always > 0
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// Client-supplied fields for create and update requests.
///
/// Deserialization ignores any `id` the client sends; ids are always
/// assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDraft {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
}

/// The two resource kinds served by the roster.
///
/// Each kind gets its own store with an independent id counter; there are
/// no relationships between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Teacher,
}

impl EntityKind {
    /// URL path segment and log label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Student => "student",
            EntityKind::Teacher => "teacher",
        }
    }

    /// All kinds, in the order their stores are created.
    pub fn all() -> [EntityKind; 2] {
        [EntityKind::Student, EntityKind::Teacher]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
