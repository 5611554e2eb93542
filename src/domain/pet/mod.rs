//! Pet aggregate
//!
//! Contains the Pet entity and the repository contract the service
//! layer persists it through.

pub mod model;
pub mod repository;

pub use model::{Pet, PetChanges};
pub use repository::PetRepository;
