//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here — the entity-kind token in
//! particular stays a free string so the dispatcher can report unrecognized
//! kinds itself, with its own exit code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "simgen",
    bin_name = "simgen",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Code generator for discrete-event simulation projects",
    long_about = "Simgen scaffolds simulation projects: a fixed directory \
                  layout, agent/state/event skeletons, and a build descriptor \
                  regenerated from the source tree.",
    after_help = "EXAMPLES:\n\
        \x20 simgen create project sim1\n\
        \x20 simgen create agent Predator Prey\n\
        \x20 simgen create state PredatorState\n\
        \x20 simgen create event MoveEvent\n\
        \x20 simgen create buildfile /opt/simlib\n\n\
        Create the project first; run every other create command from inside \
        the project root.",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a project, an entity skeleton, or the build descriptor.
    #[command(
        about = "Create a scaffolded artifact",
        after_help = "EXAMPLES:\n\
            \x20 simgen create project sim1\n\
            \x20 simgen create agent Predator Prey\n\
            \x20 simgen create buildfile /opt/simlib\n\n\
            KINDS:\n\
            \x20 project   - directory layout plus <name>_main.cpp\n\
            \x20 agent     - agents/include/<Name>.h + agents/src/<Name>.cpp\n\
            \x20 state     - states/include/<Name>.h + states/src/<Name>.cpp\n\
            \x20 event     - events/include/<Name>.h + events/src/<Name>.cpp\n\
            \x20 buildfile - Makefile listing every .cpp in the tree"
    )]
    Create(CreateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 simgen completions bash > ~/.local/share/bash-completion/completions/simgen\n\
            \x20 simgen completions zsh  > ~/.zfunc/_simgen"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `simgen create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// What to create.  A free string on purpose: unrecognized kinds are the
    /// dispatcher's business, not clap's.
    #[arg(value_name = "KIND", help = "project | agent | state | event | buildfile")]
    pub kind: String,

    /// Entity names, the project name, or the framework install root —
    /// interpreted per kind.
    #[arg(value_name = "ARGS", help = "Names (or library path for buildfile)")]
    pub args: Vec<String>,

    /// Where to place a new project (kind `project` only).
    #[arg(
        long = "parent-dir",
        value_name = "DIR",
        help = "Parent directory for a new project (default: current directory)"
    )]
    pub parent_dir: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `simgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
