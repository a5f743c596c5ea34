//! Word lists and the filters that narrow them.
//!
//! A [`WordList`] is an ordered sequence of non-empty, trimmed words. Filters
//! never mutate in place; they return new lists, so a caller can always hold
//! on to the unfiltered original.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Ordered sequence of non-empty trimmed words. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList(Vec<String>);

impl WordList {
    /// Build a list from already-clean words. Entries are trimmed and blank
    /// entries dropped, so the invariant holds regardless of input.
    pub fn new(words: impl IntoIterator<Item = String>) -> Self {
        Self(
            words
                .into_iter()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    /// Parse a line-oriented text source: one word per line, surrounding
    /// whitespace trimmed, blank lines dropped silently. Order and original
    /// casing are preserved.
    pub fn parse_lines(source: &str) -> Self {
        Self::new(source.lines().map(str::to_string))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn words(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Word at `index`. Callers guarantee `index < len()` (the generator
    /// only indexes with values from a `RandomSource` bounded by `len()`).
    pub fn get(&self, index: usize) -> &str {
        &self.0[index]
    }

    /// A new list containing only words whose lowercase form is absent from
    /// `exclusions`. An empty exclusion set short-circuits to an equal-content
    /// copy: same ordering, independent allocation.
    pub fn without_excluded(&self, exclusions: &ExclusionSet) -> Self {
        if exclusions.is_empty() {
            return self.clone();
        }
        Self(
            self.0
                .iter()
                .filter(|w| !exclusions.contains(w))
                .cloned()
                .collect(),
        )
    }

    /// A new list containing only words whose character length satisfies the
    /// inclusive `[min, max]` window. A bound of 0 means unbounded on that
    /// side. Order preserved; an empty result is not an error here.
    pub fn within_lengths(&self, min: usize, max: usize) -> Self {
        Self(
            self.0
                .iter()
                .filter(|w| {
                    let n = w.chars().count();
                    (min == 0 || n >= min) && (max == 0 || n <= max)
                })
                .cloned()
                .collect(),
        )
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Set of lowercase terms forbidden from appearing in generated codenames.
/// Matching is case-insensitive via simple ASCII-aware lowercasing; no
/// ordering significance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    /// Build a set from terms, lowercasing and trimming each; blank entries
    /// are dropped.
    pub fn new(terms: impl IntoIterator<Item = String>) -> Self {
        Self(
            terms
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    /// Parse a line-oriented exclusions source.
    pub fn parse_lines(source: &str) -> Self {
        Self::new(source.lines().map(str::to_string))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&word.to_lowercase())
    }

    /// Add a term (lowercased). Returns `false` if it was already present.
    pub fn insert(&mut self, term: &str) -> bool {
        let t = term.trim().to_lowercase();
        if t.is_empty() {
            return false;
        }
        self.0.insert(t)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
