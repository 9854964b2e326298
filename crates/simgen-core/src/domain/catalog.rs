//! Template catalog: pure lookup from entity kind to template text.
//!
//! ## Design Decisions
//!
//! ### Why `&'static str` everywhere?
//!
//! Templates are hardcoded in the binary. Static storage means lookup is
//! zero-cost and every invocation within a process sees the identical,
//! fully-loaded template text — there is no partial or concurrent mutation
//! to reason about.
//!
//! ### Why a lookup result instead of catalog state?
//!
//! A predecessor of this tool stashed the "currently selected" template and
//! token in process-wide variables before its per-name loop. Here the lookup
//! is a pure function of [`EntityKind`]: callers receive an immutable
//! [`EntityTemplates`] and pass it explicitly into each per-file write step.

use crate::domain::kind::EntityKind;
use crate::domain::templates;

/// The (header, implementation, token) triple for one entity kind.
///
/// Immutable lookup result. The token never collides with another kind's
/// token; substitution is a literal replace-all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityTemplates {
    /// Header file template (`include/<Name>.h`).
    pub header: &'static str,
    /// Implementation file template (`src/<Name>.cpp`).
    pub source: &'static str,
    /// Placeholder token both templates carry.
    pub token: &'static str,
}

impl EntityTemplates {
    /// Render the header template for `name`.
    pub fn render_header(&self, name: &str) -> String {
        substitute(self.header, self.token, name)
    }

    /// Render the implementation template for `name`.
    pub fn render_source(&self, name: &str) -> String {
        substitute(self.source, self.token, name)
    }
}

/// Replace every literal occurrence of `token` in `template` with `value`.
///
/// Single substring replace-all — deliberately not a template engine. A
/// `value` that itself contains `token` is undefined behavior (the result of
/// `str::replace` stands, no guard, no second pass).
pub fn substitute(template: &str, token: &str, value: &str) -> String {
    template.replace(token, value)
}

/// Immutable mapping from entity kind to templates.
///
/// Pure data component: no behavior beyond lookup.
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// Header/implementation/token triple for a generated entity kind.
    pub fn entity(kind: EntityKind) -> EntityTemplates {
        match kind {
            EntityKind::Agent => EntityTemplates {
                header: templates::AGENT_HEADER,
                source: templates::AGENT_SOURCE,
                token: templates::AGENT_TOKEN,
            },
            EntityKind::State => EntityTemplates {
                header: templates::STATE_HEADER,
                source: templates::STATE_SOURCE,
                token: templates::STATE_TOKEN,
            },
            EntityKind::Event => EntityTemplates {
                header: templates::EVENT_HEADER,
                source: templates::EVENT_SOURCE,
                token: templates::EVENT_TOKEN,
            },
        }
    }

    /// Entry-point source template, written verbatim at project creation.
    pub fn main_source() -> &'static str {
        templates::MAIN_SOURCE
    }

    /// Build descriptor template with its three tokens still in place.
    pub fn build_descriptor() -> &'static str {
        templates::BUILD_DESCRIPTOR
    }
}
