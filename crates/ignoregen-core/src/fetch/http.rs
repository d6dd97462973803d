//! HTTP(S) and `file://` template source

use super::{FetchError, TemplateSource, body_to_lines};
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport settings for [`HttpTemplateSource`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("ignoregen/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fetches templates over HTTP(S), or from disk for `file://` URLs.
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    http: Client,
}

impl HttpTemplateSource {
    pub fn new() -> Result<Self> {
        Self::with_config(HttpConfig::default())
    }

    pub fn with_config(config: HttpConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { http })
    }

    async fn get(&self, url: &Url) -> std::result::Result<String, FetchError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))
    }

    async fn read_file(url: &Url) -> std::result::Result<String, FetchError> {
        let path = url
            .to_file_path()
            .map_err(|_| FetchError::transport(format!("Not a local file URL: {url}")))?;

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| FetchError::transport(format!("{}: {e}", path.display())))
    }
}

#[async_trait]
impl TemplateSource for HttpTemplateSource {
    async fn fetch(&self, url: &Url) -> std::result::Result<Vec<String>, FetchError> {
        let body = match url.scheme() {
            "file" => Self::read_file(url).await?,
            _ => self.get(url).await?,
        };
        let lines = body_to_lines(&body);
        tracing::debug!(%url, lines = lines.len(), "Fetched template");
        Ok(lines)
    }
}
