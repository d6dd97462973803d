//! Caller-level option overrides.
//!
//! The caller override injected into the pipeline is merged from these
//! sources (later sources override earlier):
//!
//! 1. **Project rc file**: the first of `.ignoregenrc`, `.ignoregenrc.json`,
//!    `.ignoregenrc.toml`, `.ignoregenrc.yaml`, `.ignoregenrc.yml` found in
//!    the project directory, or an explicitly named config file instead
//! 2. **Explicit overrides**: values passed on the command line

mod resolver;

pub use resolver::{ConfigResolver, RcConfig};
