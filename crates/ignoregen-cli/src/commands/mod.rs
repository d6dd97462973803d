//! Command implementations for ignoregen-cli

pub mod check;
pub mod completions;
pub mod generate;
pub mod url;

pub use check::run_check;
pub use completions::run_completions;
pub use generate::run_generate;
pub use url::run_url;

use std::path::Path;
use std::time::Duration;

use ignoregen_core::{ConfigResolver, HttpConfig, HttpTemplateSource, PartialOptions, Pipeline};

use crate::cli::SourceArgs;
use crate::error::Result;

/// Directory searched for rc files when expanding `path`.
pub fn project_root(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Build a pipeline for the project at `root` from the command-line arguments.
pub fn build_pipeline(root: &Path, args: &SourceArgs) -> Result<Pipeline<HttpTemplateSource>> {
    let mut resolver = ConfigResolver::new(root).with_overrides(PartialOptions {
        src: args.src.clone(),
    });
    if let Some(config) = &args.config {
        resolver = resolver.with_config_file(config);
    }
    let overrides = resolver.resolve()?;
    tracing::debug!(?overrides, "Resolved caller options");

    let source = HttpTemplateSource::with_config(HttpConfig {
        timeout: Duration::from_secs(args.timeout),
        ..HttpConfig::default()
    })?;

    Ok(Pipeline::new(source).with_overrides(overrides))
}
