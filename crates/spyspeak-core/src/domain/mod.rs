//! Core domain layer for SpySpeak.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and randomness concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No ambient randomness**: Draws happen through an injected source
//! - **Immutable values**: Filters return new lists, never mutate in place

// Public API - what the world sees
pub mod case;
pub mod config;
pub mod error;
pub mod render;
pub mod value_objects;
pub mod words;

// Re-exports for convenience
pub use case::apply_case;
pub use config::GenerationConfig;
pub use error::{DomainError, ErrorCategory};
pub use render::render;
pub use value_objects::{CaseStyle, Pattern, RenderFormat};
pub use words::{ExclusionSet, WordList};
