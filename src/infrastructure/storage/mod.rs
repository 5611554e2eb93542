//! Storage layer: concrete pet repository implementations

pub mod memory;

pub use memory::InMemoryPetRepository;
