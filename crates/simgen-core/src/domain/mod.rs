//! Core domain layer for simgen.
//!
//! Pure business logic: the entity kinds, the template catalog, the fixed
//! project layout, and per-file outcomes. No I/O — filesystem access happens
//! through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable data**: Templates are `&'static str`, lookups are pure

// Public API - what the world sees
pub mod catalog;
pub mod error;
pub mod kind;
pub mod layout;
pub mod outcome;
pub mod templates;

// Re-exports for convenience
pub use catalog::{EntityTemplates, TemplateCatalog, substitute};
pub use error::{DomainError, ErrorCategory};
pub use kind::EntityKind;
pub use layout::{DESCRIPTOR_FILE, HEADER_EXT, ProjectLayout, SOURCE_EXT, SUBSYSTEM_DIRS, TEMP_DIR};
pub use outcome::{FileOutcome, OutcomeStatus};
