//! Line-file word source adapter.
//!
//! Word material lives in plain UTF-8 files, one entry per line. Loading is
//! deliberately forgiving: an absent or unreadable file yields an empty
//! result with an advisory log line, and the caller decides whether an
//! empty list is fatal for its operation.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use spyspeak_core::application::ports::WordSource;
use spyspeak_core::domain::{ExclusionSet, WordList};

/// `WordSource` over line-oriented UTF-8 files.
#[derive(Debug, Clone, Default)]
pub struct LineFileSource;

impl LineFileSource {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Word source unreadable, treating as empty");
                None
            }
        }
    }
}

impl WordSource for LineFileSource {
    fn load_words(&self, path: &Path) -> WordList {
        let list = self
            .read(path)
            .map(|content| WordList::parse_lines(&content))
            .unwrap_or_default();
        debug!(path = %path.display(), words = list.len(), "Word list loaded");
        list
    }

    fn load_exclusions(&self, path: &Path) -> ExclusionSet {
        // An absent exclusions file is the common case, not worth a warning.
        let set = match fs::read_to_string(path) {
            Ok(content) => ExclusionSet::parse_lines(&content),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No exclusions loaded");
                ExclusionSet::default()
            }
        };
        debug!(path = %path.display(), terms = set.len(), "Exclusion set loaded");
        set
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_trimmed_nonblank_lines_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  Brave ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Silent").unwrap();

        let list = LineFileSource::new().load_words(file.path());
        assert_eq!(list.words(), &["Brave", "Silent"]);
    }

    #[test]
    fn missing_file_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let list = LineFileSource::new().load_words(&dir.path().join("nope.txt"));
        assert!(list.is_empty());
    }

    #[test]
    fn exclusions_are_lowercased_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "GHOST").unwrap();
        writeln!(file, "Wolf").unwrap();

        let set = LineFileSource::new().load_exclusions(file.path());
        assert!(set.contains("ghost"));
        assert!(set.contains("WOLF"));
    }

    #[test]
    fn missing_exclusions_file_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = LineFileSource::new().load_exclusions(&dir.path().join("nope.txt"));
        assert!(set.is_empty());
    }
}
