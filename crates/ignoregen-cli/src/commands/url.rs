//! Url command implementation

use std::path::Path;

use crate::cli::SourceArgs;
use crate::commands::build_pipeline;
use crate::error::Result;

/// Print the URL `name` resolves to, after rc and CLI overrides.
pub fn run_url(name: &str, source: &SourceArgs) -> Result<()> {
    let pipeline = build_pipeline(Path::new("."), source)?;
    println!("{}", pipeline.template_url(name)?);
    Ok(())
}
