//! Pet business logic service

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Pet, PetError, PetRepository, PetResult};

/// Service for pet business operations.
///
/// Precondition violations are returned as [`PetError`]. A repository
/// that declines an add, update or delete is reported as `Ok(false)`.
pub struct PetService {
    repository: Arc<dyn PetRepository>,
}

impl PetService {
    pub fn new(repository: Arc<dyn PetRepository>) -> Self {
        Self { repository }
    }

    /// Names of all pets, in repository order. Empty when there are none.
    pub fn get_all_pet_names(&self) -> Vec<String> {
        self.repository
            .find_all()
            .into_iter()
            .map(|pet| pet.name)
            .collect()
    }

    /// Deletes every pet one at a time.
    ///
    /// Returns whether any pets existed before deletion. Individual delete
    /// results are not checked, so `true` does not mean every delete applied.
    pub fn remove_all_pets(&self) -> bool {
        let pets = self.repository.find_all();
        for pet in &pets {
            if !self.repository.delete(pet) {
                warn!(pet_id = %pet.id, "Repository declined pet delete during bulk removal");
            }
        }
        info!(count = pets.len(), "Removed all pets");
        !pets.is_empty()
    }

    pub fn get_pet_name_by_id(&self, id: &str) -> PetResult<String> {
        let pet = self.find_existing(id)?;
        Ok(pet.name)
    }

    /// Adds `pet` unless its id is already taken.
    pub fn add_new_pet(&self, pet: Pet) -> PetResult<bool> {
        if self.repository.find_by_id(&pet.id).is_some() {
            warn!(pet_id = %pet.id, "Pet already exists");
            return Err(PetError::already_exists(pet.id));
        }

        let id = pet.id.clone();
        let added = self.repository.add(pet);
        if added {
            info!(pet_id = %id, "Pet added");
        } else {
            warn!(pet_id = %id, "Repository declined pet add");
        }
        Ok(added)
    }

    /// All pets, failing with [`PetError::EmptyCollection`] when there are none.
    pub fn get_all_pets(&self) -> PetResult<Vec<Pet>> {
        let pets = self.repository.find_all();
        if pets.is_empty() {
            warn!("No pets available");
            return Err(PetError::EmptyCollection);
        }
        Ok(pets)
    }

    pub fn update_pet_details(&self, id: &str, new_name: &str) -> PetResult<bool> {
        let pet = self.find_existing(id)?;
        let updated = self.repository.update(pet.with_name(new_name));
        if updated {
            info!(pet_id = %id, new_name, "Pet updated");
        } else {
            warn!(pet_id = %id, "Repository declined pet update");
        }
        Ok(updated)
    }

    pub fn remove_pet_by_id(&self, id: &str) -> PetResult<bool> {
        let pet = self.find_existing(id)?;
        let removed = self.repository.delete(&pet);
        if removed {
            info!(pet_id = %id, "Pet removed");
        } else {
            warn!(pet_id = %id, "Repository declined pet delete");
        }
        Ok(removed)
    }

    fn find_existing(&self, id: &str) -> PetResult<Pet> {
        debug!(pet_id = %id, "Looking up pet");
        self.repository.find_by_id(id).ok_or_else(|| {
            warn!(pet_id = %id, "Pet not found");
            PetError::not_found(id)
        })
    }
}
