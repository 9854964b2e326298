//! Simgen Core - scaffolding engine for simulation projects
//!
//! This crate provides the domain and application layers for the simgen
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           simgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ProjectScaffolder, EntityGenerator,    │
//! │        BuildDescriptorGenerator)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     simgen-adapters (Infrastructure)    │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (EntityKind, TemplateCatalog, Layout)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use simgen_core::application::ProjectScaffolder;
//!
//! // Build the service with an injected filesystem adapter and scaffold:
//! let scaffolder = ProjectScaffolder::new(filesystem);
//! scaffolder.create("sim1", "/tmp".as_ref())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildDescriptorGenerator, EntityGenerator, ProjectScaffolder, ports::Filesystem,
    };
    pub use crate::domain::{
        EntityKind, EntityTemplates, FileOutcome, OutcomeStatus, ProjectLayout, TemplateCatalog,
    };
    pub use crate::error::{SimgenError, SimgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
