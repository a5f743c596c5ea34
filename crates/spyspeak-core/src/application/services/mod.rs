//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish high-level
//! use cases like "generate a batch of codenames" or "add a favorite".

pub mod favorites_service;
pub mod generator_service;

pub use favorites_service::FavoritesService;
pub use generator_service::GeneratorService;
