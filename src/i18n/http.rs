//! Fetch strategies for locale resources.

use crate::error::{Error, Result};
use std::future::Future;
use std::path::{Component, Path, PathBuf};

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET-only client the locale loader is written against.
///
/// `Err` means the request never produced a response (connection refused,
/// I/O failure). Non-2xx statuses come back as `Ok`.
pub trait HttpClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse>>;
}

impl<C: HttpClient> HttpClient for &C {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse>> {
        (**self).get(url)
    }
}

/// Real HTTP via `reqwest`. Relative request URLs are resolved against
/// `origin` when one is set.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    origin: Option<reqwest::Url>,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tippy-sim/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { client, origin: None })
    }

    pub fn with_origin(mut self, origin: &str) -> Result<Self> {
        let origin = reqwest::Url::parse(origin).map_err(|e| Error::Http(e.to_string()))?;
        self.origin = Some(origin);
        Ok(self)
    }

    fn resolve(&self, url: &str) -> Result<reqwest::Url> {
        match &self.origin {
            Some(origin) => origin.join(url),
            None => reqwest::Url::parse(url),
        }
        .map_err(|e| Error::Http(format!("{url}: {e}")))
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let url = self.resolve(url)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Serves files below a directory as if it were a static web server.
///
/// The query string is ignored. Missing files and paths escaping the root
/// answer 404.
#[derive(Debug, Clone)]
pub struct StaticDirClient {
    root: PathBuf,
}

impl StaticDirClient {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn local_path(&self, url: &str) -> Option<PathBuf> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(resolved)
    }
}

impl HttpClient for StaticDirClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let Some(path) = self.local_path(url) else {
            tracing::debug!("Rejected path outside static root: {}", url);
            return Ok(HttpResponse::status(404));
        };
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(HttpResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Not found: {}", path.display());
                Ok(HttpResponse::status(404))
            }
            Err(e) => Err(e.into()),
        }
    }
}
