//! Generate command implementation

use std::path::Path;

use colored::Colorize;
use ignoregen_fs::io;

use crate::cli::SourceArgs;
use crate::commands::{build_pipeline, project_root};
use crate::error::Result;

/// Expand the directives in `path`.
///
/// The result goes to `output`, to stdout, or back into `path`. Nothing is
/// written if any block fails.
pub async fn run_generate(
    path: &Path,
    output: Option<&Path>,
    to_stdout: bool,
    source: &SourceArgs,
) -> Result<()> {
    let lines = io::read_lines(path)?;
    let pipeline = build_pipeline(project_root(path), source)?;
    let expanded = pipeline.run(&lines).await?;

    if to_stdout {
        print!("{}", io::join_lines(&expanded));
        return Ok(());
    }

    let target = output.unwrap_or(path);
    if target == path && expanded == lines {
        println!("{} {} is up to date", "OK".green().bold(), path.display());
        return Ok(());
    }

    io::write_lines(target, &expanded)?;
    println!("{} Wrote {}", "OK".green().bold(), target.display().to_string().cyan());
    Ok(())
}
