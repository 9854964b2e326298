//! Project scaffolder - creates the fixed directory layout.
//!
//! The first command of every workflow: entity generation and the build
//! descriptor both assume the tree this service creates.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{DomainError, ProjectLayout, TemplateCatalog},
    error::SimgenResult,
};

/// Creates a new project's directory tree and entry-point file.
pub struct ProjectScaffolder {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectScaffolder {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold `parent_dir/name`.
    ///
    /// Fails with [`DomainError::AlreadyExists`] before touching the
    /// filesystem if the project root already exists. Otherwise creates the
    /// six subsystem directories and `temp/` in their fixed order, then
    /// writes `<name>_main.cpp` from the entry-point template verbatim.
    ///
    /// Directory creation is not transactional: if a later step fails, the
    /// directories created so far remain and the error propagates.
    ///
    /// Returns every created path, in creation order, for operator
    /// reporting.
    #[instrument(skip_all, fields(project = %name))]
    pub fn create(&self, name: &str, parent_dir: &Path) -> SimgenResult<Vec<PathBuf>> {
        if name.is_empty() {
            return Err(DomainError::MissingArgument {
                what: "project name",
            }
            .into());
        }

        let root = parent_dir.join(name);
        if self.filesystem.exists(&root) {
            return Err(DomainError::AlreadyExists { path: root }.into());
        }

        info!(root = %root.display(), "creating project");

        let layout = ProjectLayout::new(&root);
        let mut created = Vec::with_capacity(8);
        for dir in layout.directories() {
            self.filesystem.create_dir_all(&dir)?;
            created.push(dir);
        }

        let main_path = layout.main_source(name);
        self.filesystem
            .write_file(&main_path, TemplateCatalog::main_source())?;
        created.push(main_path);

        info!(entries = created.len(), "project created");
        Ok(created)
    }
}
