//! Completions command implementation

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "ignoregen", &mut std::io::stdout());
}
