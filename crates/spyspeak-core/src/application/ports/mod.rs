//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `spyspeak-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ExclusionSet, WordList};
use crate::error::SpyResult;

/// Port for uniform randomness.
///
/// Implemented by:
/// - `spyspeak_adapters::rng::ThreadRngSource` (production)
/// - `spyspeak_adapters::rng::StepSource` (deterministic, testing)
///
/// No cryptographic quality is required; any uniform PRNG satisfies the
/// contract. Injecting the source lets tests assert exact outputs.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in the inclusive range `[low, high]`.
    fn number_between(&mut self, low: u32, high: u32) -> u32;
}

/// Port for loading word material from line-oriented sources.
///
/// Implemented by:
/// - `spyspeak_adapters::wordfile::LineFileSource` (production)
///
/// Loading never raises: an absent or unreadable source yields an empty
/// result and the failure detail is logged as an advisory. The caller
/// decides whether an empty list blocks further processing.
pub trait WordSource {
    /// Ordered, trimmed, non-empty lines from `path`; empty on any failure.
    fn load_words(&self, path: &Path) -> WordList;

    /// Lowercased exclusion terms from `path`; empty if the source is absent.
    fn load_exclusions(&self, path: &Path) -> ExclusionSet;
}

/// Port for favorites persistence.
///
/// Implemented by:
/// - `spyspeak_adapters::favorites::FileFavoritesStore` (production)
/// - `spyspeak_adapters::favorites::InMemoryFavorites` (testing)
///
/// The load-then-mutate-then-save sequence is not protected against
/// concurrent writers; last-writer-wins is accepted behavior.
pub trait FavoritesRepository {
    /// Ordered entries, or empty if the store has never been written.
    /// Absence is a valid initial state, not an error.
    fn load(&self) -> SpyResult<Vec<String>>;

    /// Replace the stored list wholesale, one entry per line.
    fn save(&self, favorites: &[String]) -> SpyResult<()>;
}
