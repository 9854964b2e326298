//! The fixed directory tree of a scaffolded project.

use std::path::{Path, PathBuf};

/// Relative subsystem directories, in creation order.
///
/// Three sibling subsystems each with `src/` and `include/` children. The
/// order is part of the observable behavior: directories are created (and
/// reported) exactly in this sequence, with `temp/` last.
pub const SUBSYSTEM_DIRS: [&str; 6] = [
    "agents/src",
    "agents/include",
    "events/src",
    "events/include",
    "states/src",
    "states/include",
];

/// Scratch directory for runtime output streams. Created empty at project
/// creation, never populated by the generator.
pub const TEMP_DIR: &str = "temp";

/// Fixed build descriptor filename at the project root.
pub const DESCRIPTOR_FILE: &str = "Makefile";

/// Extension of generated implementation files (and the build descriptor's
/// source scan filter).
pub const SOURCE_EXT: &str = "cpp";

/// Extension of generated header files.
pub const HEADER_EXT: &str = "h";

/// Value object describing one project's on-disk layout.
///
/// Constructed once from the project root; all path computation funnels
/// through here so the layout is defined in a single place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All seven directories, in creation order (subsystems then `temp`).
    pub fn directories(&self) -> Vec<PathBuf> {
        SUBSYSTEM_DIRS
            .iter()
            .map(|d| self.root.join(d))
            .chain(std::iter::once(self.root.join(TEMP_DIR)))
            .collect()
    }

    /// Entry-point source file: `<root>/<project>_main.cpp`.
    ///
    /// `project` is the project name as supplied by the caller — no case or
    /// separator normalization.
    pub fn main_source(&self, project: &str) -> PathBuf {
        self.root.join(format!("{project}_main.{SOURCE_EXT}"))
    }

    /// Build descriptor path: `<root>/Makefile`.
    pub fn descriptor(&self) -> PathBuf {
        self.root.join(DESCRIPTOR_FILE)
    }
}
