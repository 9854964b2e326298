//! Implementation of the `simgen create` command.
//!
//! Responsibility: resolve the requested entity kind to a core service,
//! forward arguments, and display per-file results. No scaffolding policy
//! lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use simgen_adapters::LocalFilesystem;
use simgen_core::{
    application::{BuildDescriptorGenerator, EntityGenerator, ProjectScaffolder},
    domain::{DomainError, EntityKind, OutcomeStatus},
};

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `simgen create` command.
///
/// The kind token is resolved here, not in clap, so unrecognized kinds get
/// their own error and exit code.
#[instrument(skip_all, fields(kind = %args.kind))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match args.kind.as_str() {
        "project" => create_project(&args, &output),
        "agent" | "state" | "event" => {
            // Cannot fail: the arm above already narrowed the token.
            let kind = EntityKind::parse(&args.kind).map_err(|e| CliError::Core(e.into()))?;
            create_entities(kind, &args.args, &output)
        }
        "buildfile" => create_buildfile(&args.args, &config, &output),
        other => Err(CliError::Core(
            DomainError::UnknownKind { kind: other.into() }.into(),
        )),
    }
}

// ── project ───────────────────────────────────────────────────────────────────

fn create_project(args: &CreateArgs, output: &OutputManager) -> CliResult<()> {
    let name = args
        .args
        .first()
        .ok_or(CliError::MissingArgument {
            what: "project name",
        })?
        .clone();
    if args.args.len() > 1 {
        output.warning("ignoring extra arguments after the project name")?;
    }

    let parent_dir = match &args.parent_dir {
        Some(dir) => dir.clone(),
        None => current_dir()?,
    };

    debug!(parent = %parent_dir.display(), "scaffolding project");
    output.header(&format!("Creating project '{name}'..."))?;

    let scaffolder = ProjectScaffolder::new(Box::new(LocalFilesystem::new()));
    let created = scaffolder.create(&name, &parent_dir)?;

    for path in &created {
        output.success(&format!("Created {}", path.display()))?;
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {name}"))?;
    output.print("  simgen create agent <AgentName>")?;
    Ok(())
}

// ── agent / state / event ─────────────────────────────────────────────────────

fn create_entities(kind: EntityKind, names: &[String], output: &OutputManager) -> CliResult<()> {
    if names.is_empty() {
        return Err(CliError::MissingArgument {
            what: "entity name",
        });
    }

    let root = current_dir()?;
    let generator = EntityGenerator::new(Box::new(LocalFilesystem::new()));
    let outcomes = generator.generate(kind, names, &root)?;

    let mut failed = 0;
    for outcome in &outcomes {
        // Report paths relative to the project root; that is how the
        // operator thinks about the tree.
        let shown = outcome
            .path
            .strip_prefix(&root)
            .unwrap_or(&outcome.path)
            .display();
        match &outcome.status {
            OutcomeStatus::Created => output.success(&format!("Created {shown}"))?,
            OutcomeStatus::Skipped => {
                output.info(&format!("{shown} already exists, no action taken"))?;
            }
            OutcomeStatus::Failed(reason) => {
                failed += 1;
                output.error(&format!("{shown}: {reason}"))?;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::BatchFailed { failed });
    }
    Ok(())
}

// ── buildfile ─────────────────────────────────────────────────────────────────

fn create_buildfile(
    args: &[String],
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let library_root = match args.first() {
        Some(path) => path.clone(),
        None => match &config.defaults.library_root {
            Some(configured) => {
                output.info(&format!("using configured library root: {configured}"))?;
                configured.clone()
            }
            None => {
                return Err(CliError::MissingArgument {
                    what: "library path",
                });
            }
        },
    };

    let root = current_dir()?;
    let generator = BuildDescriptorGenerator::new(Box::new(LocalFilesystem::new()));
    let path = generator.generate(&library_root, &root)?;

    output.success(&format!("Created {}", path.display()))?;
    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot resolve the current directory".into(),
        source: e,
    })
}
