//! Infrastructure layer
//!
//! External concerns behind the domain contracts.

pub mod storage;

pub use storage::InMemoryPetRepository;
