//! HTTP transport seam
//!
//! The article service never talks to the network directly; it goes through
//! [`HttpTransport`], so tests can swap in an in-memory fake and deployments
//! can reuse an existing client.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ArticleError, Result};

/// Minimal text-fetching transport used by the article service
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and return the response body as text
    ///
    /// Returns `Ok(None)` when the resource does not exist (HTTP 404); the
    /// caller decides whether a missing resource is an error. All other
    /// failures are [`ArticleError::Transport`].
    async fn get_text(&self, url: &str) -> Result<Option<String>>;
}

/// Default transport backed by [`reqwest`]
///
/// Stateless per request: no retries, no caching, no cookies.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a transport with a fresh reqwest client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport reusing an existing reqwest client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn get_text(&self, url: &str) -> Result<Option<String>> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ArticleError::transport(url, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ArticleError::transport(
                url,
                format!("unexpected status {}", response.status()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ArticleError::transport(url, e))?;
        Ok(Some(body))
    }
}
