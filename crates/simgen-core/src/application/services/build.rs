//! Build descriptor generator - regenerates the project Makefile from the
//! source tree.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::{error::ApplicationError, ports::Filesystem},
    domain::{
        ProjectLayout, SOURCE_EXT, TemplateCatalog, substitute,
        templates::{PROJECT_TOKEN, SIM_PATH_TOKEN, SOURCES_TOKEN},
    },
    error::SimgenResult,
};

/// Regenerates the build descriptor for the project at a given root.
///
/// Unlike entity generation there is no skip-if-exists policy here: the
/// descriptor must always reflect the current tree, so any previous file is
/// overwritten wholesale.
pub struct BuildDescriptorGenerator {
    filesystem: Box<dyn Filesystem>,
}

impl BuildDescriptorGenerator {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Write `<project_root>/Makefile`.
    ///
    /// `library_root` is the simulation framework's install root; it is
    /// substituted verbatim and never validated to exist. The project name
    /// is the final path segment of `project_root`. The source list is every
    /// `.cpp` file under the tree as a path relative to the root, sorted
    /// lexicographically and joined with single spaces.
    ///
    /// Returns the descriptor path.
    #[instrument(skip_all, fields(root = %project_root.display()))]
    pub fn generate(&self, library_root: &str, project_root: &Path) -> SimgenResult<PathBuf> {
        let project = project_root
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ApplicationError::ProjectNameUnresolvable {
                path: project_root.to_path_buf(),
            })?;

        let source_list = self.collect_sources(project_root)?.join(" ");

        let text = substitute(TemplateCatalog::build_descriptor(), SIM_PATH_TOKEN, library_root);
        let text = substitute(&text, PROJECT_TOKEN, project);
        let text = substitute(&text, SOURCES_TOKEN, &source_list);

        let path = ProjectLayout::new(project_root).descriptor();
        self.filesystem.write_file(&path, &text)?;

        info!(path = %path.display(), "build descriptor written");
        Ok(path)
    }

    /// Relative paths of all implementation files under `root`, sorted.
    ///
    /// The underlying walk order is filesystem-dependent; sorting makes the
    /// descriptor deterministic byte-for-byte.
    fn collect_sources(&self, root: &Path) -> SimgenResult<Vec<String>> {
        let mut sources: Vec<String> = self
            .filesystem
            .walk_files(root)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|e| e == SOURCE_EXT))
            .filter_map(|p| {
                p.strip_prefix(root)
                    .ok()
                    .map(|rel| rel.to_string_lossy().into_owned())
            })
            .collect();
        sources.sort();
        Ok(sources)
    }
}
