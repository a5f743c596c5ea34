//! Application layer errors.
//!
//! These errors represent failures in orchestration and persistence, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A required source file does not exist or cannot be opened.
    /// Recoverable: word loading treats this as "empty list" plus an
    /// advisory, but operations that *require* the data surface it.
    #[error("source unavailable at {}: {reason}", path.display())]
    SourceUnavailable { path: PathBuf, reason: String },

    /// A favorites or output file could not be written. The operation is
    /// considered not-applied.
    #[error("could not persist to {}: {reason}", path.display())]
    PersistenceFailure { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that the file exists and is readable".into(),
                "Word-list files are plain UTF-8, one word per line".into(),
            ],
            Self::PersistenceFailure { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check write permissions and available disk space".into(),
                "The previous contents were left untouched".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> crate::error::ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => crate::error::ErrorCategory::NotFound,
            Self::PersistenceFailure { .. } => crate::error::ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_failure_suggests_permissions() {
        let err = ApplicationError::PersistenceFailure {
            path: PathBuf::from("/tmp/favorites.txt"),
            reason: "denied".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("permissions")));
    }

    #[test]
    fn source_unavailable_is_not_found() {
        let err = ApplicationError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            reason: "no such file".into(),
        };
        assert_eq!(err.category(), crate::error::ErrorCategory::NotFound);
    }
}
