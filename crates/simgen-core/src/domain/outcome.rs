//! Per-file generation outcomes.

use std::path::PathBuf;

/// What happened to one target file during an entity generation batch.
///
/// Outcomes are independent per file: a name may end up with its header
/// skipped and its implementation created, or vice versa. A failure does not
/// undo or abort earlier files in the same batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// File was written from the rendered template.
    Created,
    /// File already existed; left untouched (pre-existing files are
    /// authoritative — user edits are never clobbered).
    Skipped,
    /// The write failed; carries the underlying reason.
    Failed(String),
}

impl FileOutcome {
    pub fn created(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: OutcomeStatus::Created,
        }
    }

    pub fn skipped(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: OutcomeStatus::Skipped,
        }
    }

    pub fn failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: OutcomeStatus::Failed(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed(_))
    }
}
