//! Generation configuration value object.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{CaseStyle, Pattern};

/// Immutable configuration for one generation request.
///
/// Validation is the caller's responsibility before invoking the generator;
/// the generator re-checks via [`GenerationConfig::validate`] and
/// fails with the same `InvalidConfiguration` kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub pattern: Pattern,
    pub case_style: CaseStyle,
    /// Joining string between drawn components. May be empty.
    pub separator: String,
    /// Minimum word length in characters; 0 = unbounded.
    pub min_length: usize,
    /// Maximum word length in characters; 0 = unbounded.
    pub max_length: usize,
    /// Number of codenames to produce. Must be at least 1.
    pub count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            case_style: CaseStyle::default(),
            separator: " ".to_string(),
            min_length: 0,
            max_length: 0,
            count: 1,
        }
    }
}

impl GenerationConfig {
    /// Check the caller-owned preconditions: `count >= 1`, and
    /// `min_length <= max_length` when both are nonzero.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.count < 1 {
            return Err(DomainError::InvalidConfiguration {
                reason: "count must be at least 1".into(),
            });
        }
        if self.min_length > 0 && self.max_length > 0 && self.min_length > self.max_length {
            return Err(DomainError::InvalidConfiguration {
                reason: format!(
                    "minimum length {} exceeds maximum length {}",
                    self.min_length, self.max_length
                ),
            });
        }
        Ok(())
    }
}
