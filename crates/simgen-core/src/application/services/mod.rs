//! Application services - one per scaffolding use case.

pub mod build;
pub mod entity;
pub mod project;

pub use build::BuildDescriptorGenerator;
pub use entity::EntityGenerator;
pub use project::ProjectScaffolder;
