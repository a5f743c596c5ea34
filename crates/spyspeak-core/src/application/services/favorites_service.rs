//! Favorites Service - curated-list use cases.
//!
//! Wraps a [`FavoritesRepository`] port and enforces the favorites contract:
//! duplicates rejected on insert, 1-based removal indices, and persistence on
//! every mutation.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::FavoritesRepository,
    domain::{RenderFormat, error::DomainError, render},
    error::SpyResult,
};

/// Favorites management service.
pub struct FavoritesService {
    repo: Box<dyn FavoritesRepository>,
}

impl FavoritesService {
    /// Create a new favorites service with the given repository.
    pub fn new(repo: Box<dyn FavoritesRepository>) -> Self {
        Self { repo }
    }

    /// The persisted ordered list; empty if nothing was ever saved.
    pub fn load(&self) -> SpyResult<Vec<String>> {
        self.repo.load()
    }

    /// Append `name` and persist. Returns `false` (without error, and
    /// without touching storage) when an exact-match duplicate exists.
    #[instrument(skip(self, favorites))]
    pub fn add(&self, favorites: &mut Vec<String>, name: &str) -> SpyResult<bool> {
        if favorites.iter().any(|f| f == name) {
            debug!("Duplicate favorite, nothing to do");
            return Ok(false);
        }
        favorites.push(name.to_string());
        self.repo.save(favorites)?;
        info!(total = favorites.len(), "Favorite added");
        Ok(true)
    }

    /// Remove the entry at 1-based display `index` and persist. Returns the
    /// removed entry; an out-of-range index is a validation failure and the
    /// list is not applied.
    #[instrument(skip(self, favorites))]
    pub fn remove(&self, favorites: &mut Vec<String>, index: usize) -> SpyResult<String> {
        if index < 1 || index > favorites.len() {
            return Err(DomainError::InvalidIndex {
                index,
                len: favorites.len(),
            }
            .into());
        }
        let removed = favorites.remove(index - 1);
        self.repo.save(favorites)?;
        info!(removed = %removed, "Favorite removed");
        Ok(removed)
    }

    /// Render the favorites in an export format. Pure; writing the result
    /// anywhere is the caller's concern.
    pub fn export(&self, favorites: &[String], format: RenderFormat) -> String {
        render(favorites, format)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
