//! ignoregen CLI
//!
//! Expands `# ignoregen <name>` directives in an ignore-file.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{}: {}", "error".red().bold(), e);
        for block_error in e.block_errors() {
            eprintln!("   {} {}", "-".red(), block_error);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(cmd) => execute_command(cmd).await,
        None => {
            println!("{} expands ignore-file templates", "ignoregen".green().bold());
            println!();
            println!("Run {} for available commands.", "ignoregen --help".cyan());
            Ok(())
        }
    }
}

async fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Generate {
            path,
            output,
            stdout,
            source,
        } => commands::run_generate(&path, output.as_deref(), stdout, &source).await,
        Commands::Check { path, source } => commands::run_check(&path, &source).await,
        Commands::Url { name, source } => commands::run_url(&name, &source),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
