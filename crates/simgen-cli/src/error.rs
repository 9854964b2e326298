//! Error handling for the simgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping (one distinct code per operator-facing failure)

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use simgen_core::{
    domain::DomainError,
    error::SimgenError,
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required name/path argument is missing.
    #[error("missing required {what} argument")]
    MissingArgument { what: &'static str },

    /// One or more files in an entity batch failed to write.  The per-file
    /// outcomes were already reported; this only carries the count.
    #[error("{failed} file(s) could not be written")]
    BatchFailed { failed: usize },

    /// A configuration file could not be read or parsed.
    #[error("configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `simgen-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error without touching core internals.
    #[error("{0}")]
    Core(#[from] SimgenError),

    /// An I/O operation failed outside the core (e.g. resolving the current
    /// directory).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        CliError::IoError {
            message: "I/O operation failed".into(),
            source,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { what } => vec![
                format!("supply at least one {what}"),
                "Use --help for usage information".into(),
            ],

            Self::BatchFailed { failed } => vec![
                format!("{failed} write(s) failed; see the lines above"),
                "Files already created were kept — fix the cause and re-run".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("configuration issue: {message}"),
                "Check your config file, or pass --config <FILE>".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Condition                  | Code |
    /// |----------------------------|------|
    /// | I/O / internal failure     |  1   |
    /// | missing argument           |  2   |
    /// | unrecognized entity kind   |  3   |
    /// | project already exists     |  4   |
    /// | missing project layout     |  5   |
    /// | configuration failure      |  6   |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArgument { .. } => 2,
            Self::Core(SimgenError::Domain(domain)) => match domain {
                DomainError::MissingArgument { .. } => 2,
                DomainError::UnknownKind { .. } => 3,
                DomainError::AlreadyExists { .. } => 4,
                DomainError::MissingLayout { .. } => 5,
            },
            Self::ConfigError { .. } => 6,
            Self::BatchFailed { .. } | Self::Core(_) | Self::IoError { .. } => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = write!(output, "\n{} {}\n\n", "✗".red().bold(), "Error:".red().bold());
        let _ = writeln!(output, "  {}", self.to_string().red());

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = writeln!(output, "\n  {} {}", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(output, "\n{}", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(
                output,
                "\n{} {}",
                "ℹ".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {self}");

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.exit_code() {
            1 | 6 => tracing::error!("{}", self),
            _ => tracing::warn!("{}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}
