//! Domain value objects: Pattern, CaseStyle, RenderFormat.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each carries its string name and a *lossy* parser: an unrecognized
//! selector falls back to the documented default instead of erroring. Shells that want strict validation (clap value enums) enforce it
//! before these types are reached.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Pattern ──────────────────────────────────────────────────────────────────

/// The structural template used to assemble a raw codename.
///
/// Each variant names the categories drawn (in order). Draws are independent
/// and with replacement: the same word may repeat within one codename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Adjective + noun (the default).
    #[default]
    AdjNoun,
    /// Two independent noun draws.
    NounNoun,
    /// Two independent adjective draws + a noun.
    AdjAdjNoun,
    /// Noun followed by an adjective.
    NounAdj,
    /// Adjective + noun + random integer in [1, 999].
    AdjNounNumber,
}

impl Pattern {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AdjNoun => "adj-noun",
            Self::NounNoun => "noun-noun",
            Self::AdjAdjNoun => "adj-adj-noun",
            Self::NounAdj => "noun-adj",
            Self::AdjNounNumber => "adj-noun-number",
        }
    }

    /// Parse a pattern name, falling back to [`Pattern::AdjNoun`] for
    /// anything unrecognized. The fallback is documented behavior, not an
    /// error condition.
    pub fn parse_lossy(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "noun-noun" => Self::NounNoun,
            "adj-adj-noun" => Self::AdjAdjNoun,
            "noun-adj" => Self::NounAdj,
            "adj-noun-number" => Self::AdjNounNumber,
            _ => Self::AdjNoun,
        }
    }

    /// Whether this pattern draws from the adjectives list.
    pub const fn needs_adjectives(&self) -> bool {
        !matches!(self, Self::NounNoun)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CaseStyle ────────────────────────────────────────────────────────────────

/// The capitalization transform applied after pattern assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// First Letter Of Each Segment Capitalized (the default).
    #[default]
    Title,
    /// ALL LETTERS CAPITALIZED.
    Upper,
    /// all letters lowercase.
    Lower,
    /// Only the first letter of the whole string capitalized.
    Sentence,
}

impl CaseStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Sentence => "sentence",
        }
    }

    /// Parse a case-style name; unrecognized values fall back to `Title`.
    pub fn parse_lossy(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            "sentence" => Self::Sentence,
            _ => Self::Title,
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RenderFormat ─────────────────────────────────────────────────────────────

/// Serialization format for a batch of codenames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Newline-joined plain text (the default).
    #[default]
    Text,
    /// `{"codenames": [...]}` with 2-space indentation.
    Json,
    /// `Codename` header plus one quoted row per entry.
    Csv,
    /// Minimal standalone document. Values are inserted verbatim; no
    /// HTML-escaping is performed.
    Html,
}

impl RenderFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Html => "html",
        }
    }

    /// Parse a format name; unrecognized values fall back to `Text`.
    pub fn parse_lossy(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            "html" => Self::Html,
            _ => Self::Text,
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
