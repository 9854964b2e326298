//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `simgen-adapters` crate provides implementations.

use crate::error::SimgenResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `simgen_adapters::filesystem::LocalFilesystem` (production)
/// - `simgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Writes are whole-file; there is no append or partial update
/// - Existence checks and writes are separate calls — two concurrent
///   invocations can race them (last write wins); locking is a non-goal
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SimgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> SimgenResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Recursively collect every file beneath `root`.
    ///
    /// Returns full paths (directories are walked, not returned). Callers
    /// must not rely on any particular order — see the build descriptor
    /// service, which sorts.
    fn walk_files(&self, root: &Path) -> SimgenResult<Vec<PathBuf>>;
}
