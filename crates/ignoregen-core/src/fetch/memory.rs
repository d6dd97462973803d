//! In-memory template source

use super::{FetchError, TemplateSource, body_to_lines};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Serves templates from a map keyed by URL.
///
/// Unknown URLs answer with status 404. Every request is recorded, which
/// makes the source useful for offline runs and for tests.
#[derive(Debug, Default)]
pub struct MemoryTemplateSource {
    responses: HashMap<String, Result<String, FetchError>>,
    requested: Mutex<Vec<String>>,
}

impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `url`.
    pub fn with_template(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(body.into()));
        self
    }

    /// Answer `url` with an error status.
    pub fn with_status(mut self, url: impl Into<String>, code: u16) -> Self {
        self.responses
            .insert(url.into(), Err(FetchError::status(code)));
        self
    }

    /// URLs requested so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|requested| requested.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TemplateSource for MemoryTemplateSource {
    async fn fetch(&self, url: &Url) -> std::result::Result<Vec<String>, FetchError> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }

        match self.responses.get(url.as_str()) {
            Some(Ok(body)) => Ok(body_to_lines(body)),
            Some(Err(error)) => Err(error.clone()),
            None => Err(FetchError::status(404)),
        }
    }
}
