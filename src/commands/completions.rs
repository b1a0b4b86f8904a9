//! Completions command handler

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use subprompt::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
