//! Shared test utilities for the ignoregen workspace.
//!
//! Fixtures here never touch the network. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`], a temp directory with an ignore-file and rc
//! - [`templates`]: [`TemplateDir`] served via `file://` and [`TemplateServer`]
//!   served over local HTTP

pub mod project;
pub mod templates;

pub use project::TestProject;
pub use templates::{TemplateDir, TemplateServer};

/// Templates used across the test suites, as `(name, body)`.
pub const SAMPLE_TEMPLATES: [(&str, &str); 3] = [
    ("node", "node_modules/\n"),
    ("env", ".env*\n.envrc\n\n!.env.example\n"),
    ("rust", "/target\n  \n**/*.rs.bk\n"),
];

/// Convert string slices to owned lines.
pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
