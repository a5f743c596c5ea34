//! Infrastructure adapters for SpySpeak.
//!
//! This crate implements the ports defined in `spyspeak_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod favorites;
pub mod rng;
pub mod themes;
pub mod wordfile;

// Re-export commonly used adapters
pub use favorites::{FileFavoritesStore, InMemoryFavorites};
pub use rng::{StepSource, ThreadRngSource};
pub use themes::ThemeCatalog;
pub use wordfile::LineFileSource;
