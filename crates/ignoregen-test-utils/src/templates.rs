//! Template fixtures: a directory on disk and a local HTTP server.

use axum::Router;
use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::routing::get;
use std::collections::HashMap;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// A temp directory of `<name>.ignore` files, addressable via `file://`.
pub struct TemplateDir {
    temp_dir: TempDir,
}

impl TemplateDir {
    pub fn new(templates: &[(&str, &str)]) -> Self {
        let dir = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        for (name, body) in templates {
            dir.add(name, body);
        }
        dir
    }

    /// Directory populated with [`crate::SAMPLE_TEMPLATES`].
    pub fn sample() -> Self {
        Self::new(&crate::SAMPLE_TEMPLATES)
    }

    pub fn add(&self, name: &str, body: &str) {
        fs::write(self.path().join(format!("{name}.ignore")), body).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `file://` URL of the directory, with a trailing slash.
    pub fn src(&self) -> String {
        Url::from_directory_path(self.path()).unwrap().to_string()
    }
}

/// A local HTTP server answering `GET /templates/<name>.ignore`.
///
/// Unknown names answer 404. Names passed to [`TemplateServer::start_with`] as
/// failures answer with the given status. The server stops when dropped.
pub struct TemplateServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

type Routes = Arc<HashMap<String, (StatusCode, String)>>;

impl TemplateServer {
    /// Start serving `templates` on an ephemeral localhost port.
    pub async fn start(templates: &[(&str, &str)]) -> Self {
        Self::start_with(templates, &[]).await
    }

    /// Like [`TemplateServer::start`], with some names answering an error status.
    pub async fn start_with(templates: &[(&str, &str)], failures: &[(&str, u16)]) -> Self {
        let mut routes = HashMap::new();
        for (name, body) in templates {
            routes.insert(name.to_string(), (StatusCode::OK, body.to_string()));
        }
        for (name, status) in failures {
            let status = StatusCode::from_u16(*status).unwrap();
            routes.insert(name.to_string(), (status, String::new()));
        }

        let routes: Routes = Arc::new(routes);
        let router = Router::new()
            .route("/templates/:file", get(template))
            .with_state(routes);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, handle }
    }

    /// Base URL to use as `src`, with a trailing slash.
    pub fn src(&self) -> String {
        format!("http://{}/templates/", self.addr)
    }

    /// Full URL of one template.
    pub fn url(&self, name: &str) -> String {
        format!("{}{name}.ignore", self.src())
    }
}

impl Drop for TemplateServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn template(
    State(routes): State<Routes>,
    UrlPath(file): UrlPath<String>,
) -> (StatusCode, String) {
    file.strip_suffix(".ignore")
        .and_then(|name| routes.get(name))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()))
}

