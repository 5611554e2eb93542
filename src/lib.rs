//! # Pet Service
//!
//! Business rules for managing a collection of pets on top of an
//! abstract repository.
//!
//! ## Architecture
//!
//! - **domain**: the `Pet` entity and the `PetRepository` contract
//! - **application**: `PetService`, the rule-checked operation set
//! - **infrastructure**: the in-memory repository
//! - **shared**: error types
//! - **config** / **logging**: TOML configuration and tracing setup

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;

pub use application::PetService;
pub use config::{default_config_path, AppConfig, LoggingConfig};
pub use domain::{Pet, PetChanges, PetError, PetRepository, PetResult};
pub use infrastructure::InMemoryPetRepository;
pub use logging::init_tracing;
pub use shared::errors::ConfigError;
