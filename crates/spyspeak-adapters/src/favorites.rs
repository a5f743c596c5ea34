//! Favorites persistence adapters.
//!
//! The production store is a flat UTF-8 file, one favorite per line. Saves
//! replace the whole file by writing a sibling temp file and renaming it
//! over the target, so a crash mid-write leaves the previous contents
//! intact. Concurrent writers are not coordinated; last writer wins.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use spyspeak_core::application::ports::FavoritesRepository;
use spyspeak_core::application::ApplicationError;
use spyspeak_core::error::SpyResult;

/// File-backed `FavoritesRepository`.
#[derive(Debug, Clone)]
pub struct FileFavoritesStore {
    path: PathBuf,
}

impl FileFavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_failure(&self, e: &std::io::Error) -> ApplicationError {
        ApplicationError::PersistenceFailure {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

impl FavoritesRepository for FileFavoritesStore {
    fn load(&self) -> SpyResult<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // A store that was never written is a valid empty store.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No favorites file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ApplicationError::SourceUnavailable {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn save(&self, favorites: &[String]) -> SpyResult<()> {
        let mut body = favorites.join("\n");
        if !favorites.is_empty() {
            body.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).map_err(|e| self.persistence_failure(&e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.persistence_failure(&e))?;

        info!(path = %self.path.display(), entries = favorites.len(), "Favorites saved");
        Ok(())
    }
}

/// In-memory `FavoritesRepository` for tests.
#[derive(Debug, Default)]
pub struct InMemoryFavorites {
    entries: RefCell<Vec<String>>,
}

impl InMemoryFavorites {
    pub fn new(initial: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: RefCell::new(initial.into_iter().collect()),
        }
    }

    /// Snapshot of the stored entries (testing helper).
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl FavoritesRepository for InMemoryFavorites {
    fn load(&self) -> SpyResult<Vec<String>> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, favorites: &[String]) -> SpyResult<()> {
        *self.entries.borrow_mut() = favorites.to_vec();
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
