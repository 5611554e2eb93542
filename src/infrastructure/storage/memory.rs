//! In-memory pet repository

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, warn};

use crate::domain::{Pet, PetRepository};

#[derive(Debug, Clone)]
struct StoredPet {
    /// Insertion sequence, used to keep `find_all` ordered.
    seq: u64,
    pet: Pet,
}

/// In-memory pet storage for development and testing.
///
/// `find_all` returns pets in insertion order. An update keeps the
/// original position of the pet it replaces.
pub struct InMemoryPetRepository {
    pets: DashMap<String, StoredPet>,
    seq_counter: AtomicU64,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self {
            pets: DashMap::new(),
            seq_counter: AtomicU64::new(1),
        }
    }

    /// Repository seeded with `pets` in iteration order.
    ///
    /// Later duplicates of an id are skipped.
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        let repo = Self::new();
        for pet in pets {
            let id = pet.id.clone();
            if !repo.add(pet) {
                warn!(pet_id = %id, "Duplicate pet id in seed data, skipping");
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for InMemoryPetRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PetRepository for InMemoryPetRepository {
    fn find_by_id(&self, id: &str) -> Option<Pet> {
        self.pets.get(id).map(|entry| entry.pet.clone())
    }

    fn find_all(&self) -> Vec<Pet> {
        let mut stored: Vec<StoredPet> = self.pets.iter().map(|e| e.value().clone()).collect();
        stored.sort_by_key(|s| s.seq);
        stored.into_iter().map(|s| s.pet).collect()
    }

    fn add(&self, pet: Pet) -> bool {
        match self.pets.entry(pet.id.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                let seq = self.seq_counter.fetch_add(1, Ordering::SeqCst);
                debug!(pet_id = %pet.id, seq, "Stored pet");
                slot.insert(StoredPet { seq, pet });
                true
            }
        }
    }

    fn update(&self, pet: Pet) -> bool {
        match self.pets.get_mut(&pet.id) {
            Some(mut stored) => {
                stored.pet = pet;
                true
            }
            None => false,
        }
    }

    fn delete(&self, pet: &Pet) -> bool {
        self.pets.remove(&pet.id).is_some()
    }
}
