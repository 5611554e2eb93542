pub mod service;

pub use service::PetService;
