//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed (permission denied, disk full, ...).
    /// Fatal to the current command only; never retried.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The project name could not be derived from the working directory
    /// (no final path segment, or not valid UTF-8).
    #[error("cannot derive a project name from '{path}'")]
    ProjectNameUnresolvable { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ProjectNameUnresolvable { path } => vec![
                format!("'{}' has no usable final path segment", path.display()),
                "Run the command from inside the project directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ProjectNameUnresolvable { .. } => ErrorCategory::Validation,
        }
    }
}
