//! Pet domain entity

use serde::{Deserialize, Serialize};

/// A pet, identified by a caller-assigned id.
///
/// Values are never mutated once handed to a repository; changes are
/// expressed by building a replacement with [`Pet::with_changes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
}

/// Field overrides applied by [`Pet::with_changes`].
///
/// There is no `id` override; identity never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetChanges {
    pub name: Option<String>,
}

impl PetChanges {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Pet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Copy of this pet with every field present in `changes` replaced.
    pub fn with_changes(&self, changes: PetChanges) -> Self {
        Self {
            id: self.id.clone(),
            name: changes.name.unwrap_or_else(|| self.name.clone()),
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        self.with_changes(PetChanges::name(name))
    }
}

impl std::fmt::Display for Pet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
