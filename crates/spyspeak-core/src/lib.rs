//! SpySpeak Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the SpySpeak
//! codename generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     spyspeak-cli (CLI / console / HTTP) │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GeneratorService, FavoritesService)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (RandomSource, WordSource, Favorites)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    spyspeak-adapters (Infrastructure)   │
//! │ (LineFileSource, FileFavoritesStore, …) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (WordList, Pattern, CaseStyle, render) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spyspeak_core::{
//!     application::GeneratorService,
//!     domain::{ExclusionSet, GenerationConfig, WordList},
//! };
//!
//! let adjectives = WordList::parse_lines("Brave\nSilent\n");
//! let nouns = WordList::parse_lines("Tiger\nFalcon\n");
//!
//! // rng: any RandomSource adapter (ThreadRngSource in production)
//! let mut service = GeneratorService::new(rng);
//! let names = service.generate(
//!     &adjectives,
//!     &nouns,
//!     &ExclusionSet::default(),
//!     &GenerationConfig::default(),
//! )?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FavoritesService, GeneratorService,
        ports::{FavoritesRepository, RandomSource, WordSource},
    };
    pub use crate::domain::{
        CaseStyle, ExclusionSet, GenerationConfig, Pattern, RenderFormat, WordList, render,
    };
    pub use crate::error::{SpyResult, SpySpeakError};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
