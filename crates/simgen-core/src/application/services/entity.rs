//! Entity generator - header/implementation pairs from the template catalog.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{
        DomainError, EntityKind, EntityTemplates, FileOutcome, HEADER_EXT, OutcomeStatus,
        SOURCE_EXT, TemplateCatalog,
    },
    error::SimgenResult,
};

/// Generates header and implementation skeletons for agents, states, and
/// events inside an existing project tree.
pub struct EntityGenerator {
    filesystem: Box<dyn Filesystem>,
}

impl EntityGenerator {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate files for every name in `names`, in order.
    ///
    /// Precondition, checked once up front: the subsystem's `src` and
    /// `include` directories must exist under `project_root`. If either is
    /// missing the whole batch fails with [`DomainError::MissingLayout`]
    /// naming the missing directory, and nothing is written.
    ///
    /// Per name, two files are attempted independently:
    /// `include/<name>.h` and `src/<name>.cpp`. An existing file is skipped
    /// (pre-existing files are authoritative); a missing one is written from
    /// its template with every placeholder occurrence replaced by the name.
    /// A failed write is recorded as an outcome and does not undo or stop
    /// the rest of the batch.
    #[instrument(skip_all, fields(kind = %kind, batch = names.len()))]
    pub fn generate(
        &self,
        kind: EntityKind,
        names: &[String],
        project_root: &Path,
    ) -> SimgenResult<Vec<FileOutcome>> {
        if names.is_empty() {
            return Err(DomainError::MissingArgument {
                what: "entity name",
            }
            .into());
        }

        // Layout precondition, once for the batch.
        for dir in [kind.src_dir(), kind.include_dir()] {
            let full = project_root.join(&dir);
            if !self.filesystem.exists(&full) {
                return Err(DomainError::MissingLayout { dir }.into());
            }
        }

        let templates = TemplateCatalog::entity(kind);
        let mut outcomes = Vec::with_capacity(names.len() * 2);

        for name in names {
            let header = project_root
                .join(kind.include_dir())
                .join(format!("{name}.{HEADER_EXT}"));
            outcomes.push(self.write_rendered(&templates, name, &header, true));

            let source = project_root
                .join(kind.src_dir())
                .join(format!("{name}.{SOURCE_EXT}"));
            outcomes.push(self.write_rendered(&templates, name, &source, false));
        }

        info!(
            created = outcomes
                .iter()
                .filter(|o| o.status == OutcomeStatus::Created)
                .count(),
            total = outcomes.len(),
            "entity batch finished"
        );
        Ok(outcomes)
    }

    /// Render one template for `name` and write it, unless the target
    /// already exists.
    fn write_rendered(
        &self,
        templates: &EntityTemplates,
        name: &str,
        path: &Path,
        header: bool,
    ) -> FileOutcome {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "already exists, no action taken");
            return FileOutcome::skipped(path);
        }

        let content = if header {
            templates.render_header(name)
        } else {
            templates.render_source(name)
        };

        match self.filesystem.write_file(path, &content) {
            Ok(()) => FileOutcome::created(path),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "write failed");
                FileOutcome::failed(path, e.to_string())
            }
        }
    }
}
