//! Theme catalog discovery.
//!
//! A theme is a pair of word files sharing a basename in one directory:
//! `<name>_adj.txt` and `<name>_nouns.txt`. The catalog enumerates the
//! basenames that have both halves and resolves a named theme to its pair
//! of paths.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

const ADJ_SUFFIX: &str = "_adj.txt";
const NOUNS_SUFFIX: &str = "_nouns.txt";

/// Resolved file pair for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePaths {
    pub adjectives: PathBuf,
    pub nouns: PathBuf,
}

/// Directory-backed theme catalog.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    dir: PathBuf,
}

impl ThemeCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sorted basenames that have both an adjectives and a nouns file.
    /// An absent or unreadable directory yields an empty catalog.
    pub fn themes(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "Themes directory unreadable");
                return Vec::new();
            }
        };

        let mut adj = BTreeSet::new();
        let mut nouns = BTreeSet::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(base) = name.strip_suffix(ADJ_SUFFIX) {
                adj.insert(base.to_string());
            } else if let Some(base) = name.strip_suffix(NOUNS_SUFFIX) {
                nouns.insert(base.to_string());
            }
        }

        adj.intersection(&nouns).cloned().collect()
    }

    /// Paths for a named theme, or `None` when either half is missing.
    pub fn resolve(&self, theme: &str) -> Option<ThemePaths> {
        let paths = ThemePaths {
            adjectives: self.dir.join(format!("{theme}{ADJ_SUFFIX}")),
            nouns: self.dir.join(format!("{theme}{NOUNS_SUFFIX}")),
        };
        if paths.adjectives.is_file() && paths.nouns.is_file() {
            Some(paths)
        } else {
            None
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
