pub mod pet;

// Re-export commonly used types
pub use pet::{Pet, PetChanges, PetRepository};

// Re-export errors from shared for convenience
pub use crate::shared::errors::{PetError, PetResult};
