// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass through layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project root collides with an existing path. No filesystem
    /// changes are made when this is raised.
    #[error("project already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// A prerequisite subsystem directory is absent — the project was never
    /// scaffolded here, or the command ran outside the project root. Names
    /// the first missing directory.
    #[error("missing project directory '{dir}'")]
    MissingLayout { dir: PathBuf },

    /// Unrecognized entity kind token.
    #[error("'{kind}' is not a recognized entity kind")]
    UnknownKind { kind: String },

    /// A required name/path argument was not supplied.
    #[error("missing required {what} argument")]
    MissingArgument { what: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("the directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::MissingLayout { dir } => vec![
                format!("expected directory '{}' was not found", dir.display()),
                "Run 'simgen create project <name>' first".into(),
                "Or change into the project root before generating entities".into(),
            ],
            Self::UnknownKind { kind } => vec![
                format!("'{kind}' is not something simgen can create"),
                "Valid kinds: project, agent, state, event, buildfile".into(),
            ],
            Self::MissingArgument { what } => vec![
                format!("supply at least one {what}"),
                "Use --help for usage information".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Validation,
            Self::MissingLayout { .. } => ErrorCategory::NotFound,
            Self::UnknownKind { .. } | Self::MissingArgument { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
