use std::path::PathBuf;

use thiserror::Error;

pub const PET_NOT_FOUND_MESSAGE: &str = "Pet not found";
pub const PET_ALREADY_EXISTS_MESSAGE: &str = "Pet with the given ID already exists";
pub const NO_PETS_AVAILABLE_MESSAGE: &str = "No pets available";

/// Precondition failures raised by the pet service.
///
/// Messages are fixed; the carried id is only there for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PetError {
    #[error("{}", PET_NOT_FOUND_MESSAGE)]
    NotFound { id: String },

    #[error("{}", PET_ALREADY_EXISTS_MESSAGE)]
    AlreadyExists { id: String },

    #[error("{}", NO_PETS_AVAILABLE_MESSAGE)]
    EmptyCollection,
}

impl PetError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Id the failed operation targeted, if any.
    pub fn pet_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { id } | Self::AlreadyExists { id } => Some(id),
            Self::EmptyCollection => None,
        }
    }
}

/// Result type for pet service operations
pub type PetResult<T> = Result<T, PetError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
