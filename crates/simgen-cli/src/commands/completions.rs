//! Implementation of the `simgen completions` command.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

/// Write a completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let out = &mut io::stdout();

    match args.shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, name, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, name, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, name, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, name, out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, name, out),
    }

    Ok(())
}
