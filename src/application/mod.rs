//! Application layer
//!
//! Business rules layered over the domain contracts.

pub mod pets;

pub use pets::PetService;
