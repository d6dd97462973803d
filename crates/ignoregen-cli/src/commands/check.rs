//! Check command implementation

use std::path::Path;

use colored::Colorize;
use ignoregen_fs::io;

use crate::cli::SourceArgs;
use crate::commands::{build_pipeline, project_root};
use crate::error::{CliError, Result};

/// Fail with [`CliError::OutOfDate`] unless `path` already matches its expansion.
pub async fn run_check(path: &Path, source: &SourceArgs) -> Result<()> {
    let lines = io::read_lines(path)?;
    let pipeline = build_pipeline(project_root(path), source)?;
    let expanded = pipeline.run(&lines).await?;

    if expanded != lines {
        println!(
            "Run {} to update.",
            format!("ignoregen generate {}", path.display()).cyan()
        );
        return Err(CliError::OutOfDate {
            path: path.to_path_buf(),
        });
    }

    println!("{} {} is up to date", "OK".green().bold(), path.display());
    Ok(())
}
