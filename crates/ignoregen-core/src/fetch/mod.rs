//! Template fetching.
//!
//! [`TemplateSource`] is the only I/O boundary of the pipeline. A source takes
//! a fully resolved URL and returns the template's non-empty lines.

mod http;
mod memory;

pub use http::{HttpConfig, HttpTemplateSource};
pub use memory::MemoryTemplateSource;

use crate::options::OptionSet;
use async_trait::async_trait;
use ignoregen_blocks::cut_empty_lines;
use url::Url;

/// A failed template fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    /// HTTP status, when the server answered with one
    pub status: Option<u16>,
    pub message: String,
}

impl FetchError {
    /// The server answered with an error status.
    pub fn status(code: u16) -> Self {
        Self {
            status: Some(code),
            message: format!("Request failed with status code {code}"),
        }
    }

    /// The request never produced a response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

/// Retrieves template content by URL.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetch the template at `url` as non-empty lines.
    async fn fetch(&self, url: &Url) -> std::result::Result<Vec<String>, FetchError>;
}

/// Resolve `<name>.ignore` against `options.src`.
///
/// Uses relative-reference resolution, so the trailing slash on `src` matters:
/// `https://a/b/` + `env.ignore` is `https://a/b/env.ignore`, while
/// `https://a/b` + `env.ignore` is `https://a/env.ignore`.
///
/// # Example
/// ```
/// use ignoregen_core::{OptionSet, build_url};
///
/// let options = OptionSet { src: "https://example.com/ignores/".to_string() };
/// let url = build_url("env", &options).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/ignores/env.ignore");
/// ```
pub fn build_url(name: &str, options: &OptionSet) -> Result<Url, url::ParseError> {
    Url::parse(&options.src)?.join(&format!("{name}.ignore"))
}

/// Split a response body into lines, dropping empty and whitespace-only ones.
pub fn body_to_lines(body: &str) -> Vec<String> {
    cut_empty_lines(body.lines())
}
