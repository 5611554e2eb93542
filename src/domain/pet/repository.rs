//! Pet repository interface

use super::model::Pet;

/// Persistence capability the pet service depends on.
///
/// A `false` result from `add`, `update` or `delete` means the storage
/// step did not apply; the cause is not reported.
pub trait PetRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<Pet>;
    /// All stored pets, in the order the implementation documents.
    fn find_all(&self) -> Vec<Pet>;
    fn add(&self, pet: Pet) -> bool;
    /// Replaces the stored pet with the same id.
    fn update(&self, pet: Pet) -> bool;
    fn delete(&self, pet: &Pet) -> bool;
}
