use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Generation Errors (nothing left to draw from)
    // ========================================================================
    #[error("no usable words remain after applying exclusions")]
    NoWordsAfterExclusion,

    #[error("no words meet the length criteria (min={min}, max={max})")]
    NoWordsMeetLengthCriteria { min: usize, max: usize },

    // ========================================================================
    // Validation Errors (caller contract violations)
    // ========================================================================
    #[error("invalid generation configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("favorite index {index} is out of range (1-{len})")]
    InvalidIndex { index: usize, len: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoWordsAfterExclusion => vec![
                "Every adjective or noun was filtered out by your exclusions".into(),
                "Remove entries from the exclusions file, or use a different word list".into(),
            ],
            Self::NoWordsMeetLengthCriteria { min, max } => vec![
                format!("No words fit the length window [{min}, {max}]"),
                "Relax --min-length / --max-length (0 means unbounded)".into(),
            ],
            Self::InvalidConfiguration { reason } => vec![
                format!("Configuration problem: {reason}"),
                "count must be at least 1".into(),
                "min-length must not exceed max-length when both are set".into(),
            ],
            Self::InvalidIndex { len, .. } => vec![
                format!("Pick a number between 1 and {len}"),
                "List favorites first to see their numbers".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoWordsAfterExclusion | Self::NoWordsMeetLengthCriteria { .. } => {
                ErrorCategory::Generation
            }
            Self::InvalidConfiguration { .. } | Self::InvalidIndex { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Generation,
}
