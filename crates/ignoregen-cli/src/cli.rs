//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ignoregen_fs::ProjectFile;
use std::path::PathBuf;

/// ignoregen - Expand template directives in ignore-files
#[derive(Parser, Debug)]
#[command(name = "ignoregen")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where templates come from
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Base URL for templates; overrides the rc file
    #[arg(long, env = "IGNOREGEN_SRC")]
    pub src: Option<String>,

    /// Config file to use instead of discovering .ignoregenrc
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Expand directives and write the result
    ///
    /// Examples:
    ///   ignoregen generate                   # Rewrite ./.gitignore
    ///   ignoregen generate .dockerignore     # Rewrite another file
    ///   ignoregen generate --stdout          # Print instead of writing
    Generate {
        /// Ignore-file to expand
        #[arg(default_value = ProjectFile::GitIgnore.as_str())]
        path: PathBuf,

        /// Write to this file instead of overwriting PATH
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the result instead of writing a file
        #[arg(long)]
        stdout: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Exit with an error if the file is not up to date
    Check {
        /// Ignore-file to check
        #[arg(default_value = ProjectFile::GitIgnore.as_str())]
        path: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the URL a template name resolves to
    Url {
        /// Template name, e.g. "node"
        name: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
