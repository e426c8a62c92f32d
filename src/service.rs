//! Article content resolution service
//!
//! One stateless service owns the whole retrieval pipeline: fetch the
//! manifest, fetch raw markdown per article, convert and sanitize it, and
//! hand resolved records to the view layer. Every call re-fetches from
//! scratch; there is no cache and no retry.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::debug;

use crate::article::{Article, parse_manifest};
use crate::config::ServiceConfig;
use crate::error::{ArticleError, Result};
use crate::markdown;
use crate::sanitize::{Sanitizer, TrustPolicy};
use crate::transport::{HttpClient, HttpTransport};

/// Fetches article metadata and content, producing resolved [`Article`]s
///
/// # Example
///
/// ```no_run
/// use articles_rs::{ArticleService, ServiceConfig};
///
/// # async fn example() -> articles_rs::Result<()> {
/// let service = ArticleService::new(ServiceConfig::new("https://blog.example.com"));
///
/// // All articles, content resolved in parallel, manifest order preserved
/// let articles = service.list_articles_with_content().await?;
///
/// // One article by its routing key
/// let article = service.find_by_filename("first-post").await?;
/// # Ok(())
/// # }
/// ```
pub struct ArticleService {
    config: ServiceConfig,
    transport: Arc<dyn HttpTransport>,
    sanitizer: Arc<dyn Sanitizer>,
}

impl ArticleService {
    /// Create a service with the default transport and trust policy
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_parts(config, Arc::new(HttpClient::new()), Arc::new(TrustPolicy))
    }

    /// Create a service with injected transport and sanitizer
    pub fn with_parts(
        config: ServiceConfig,
        transport: Arc<dyn HttpTransport>,
        sanitizer: Arc<dyn Sanitizer>,
    ) -> Self {
        Self {
            config,
            transport,
            sanitizer,
        }
    }

    /// Fetch the manifest and return article metadata, content unresolved
    ///
    /// A missing or empty manifest resource is an empty list, never an
    /// error. A manifest that exists but fails to decode is
    /// [`ArticleError::Manifest`].
    pub async fn list_articles(&self) -> Result<Vec<Article>> {
        let url = self.config.manifest_url();
        let body = self.transport.get_text(&url).await?;
        let articles = match body {
            Some(body) => parse_manifest(&body)?,
            None => Vec::new(),
        };
        debug!("manifest at {} listed {} articles", url, articles.len());
        Ok(articles)
    }

    /// Fetch and render one article's markdown content
    ///
    /// Returns the article with `rendered_content` populated. Fails with
    /// [`ArticleError::Transport`] when the content resource is missing or
    /// unreachable, and with [`ArticleError::Conversion`] when the
    /// sanitizer rejects the converted HTML.
    pub async fn resolve_content(&self, article: Article) -> Result<Article> {
        let url = self.config.content_url(&article.path);
        let raw = self
            .transport
            .get_text(&url)
            .await?
            .ok_or_else(|| ArticleError::transport(&url, "content resource not found"))?;

        let html = markdown::to_html(&raw);
        let safe = self.sanitizer.sanitize(&html)?;
        debug!(
            "resolved content for {} ({} bytes markdown)",
            article.filename,
            raw.len()
        );
        Ok(article.with_content(safe))
    }

    /// Fetch the manifest and resolve every article's content concurrently
    ///
    /// Fan-out/fan-in: one content fetch per article runs concurrently, and
    /// the joined output preserves manifest order regardless of completion
    /// order. All-or-nothing: if any single resolution fails, the whole
    /// operation fails. An empty manifest completes immediately with an
    /// empty list and issues no content requests.
    pub async fn list_articles_with_content(&self) -> Result<Vec<Article>> {
        let articles = self.list_articles().await?;
        if articles.is_empty() {
            return Ok(articles);
        }

        let resolutions = articles.into_iter().map(|a| self.resolve_content(a));
        try_join_all(resolutions).await
    }

    /// Find one article by its `filename` routing key and resolve it
    ///
    /// Linear search over the manifest; the first match wins. A filename
    /// with no match is [`ArticleError::NotFound`], a logic error distinct
    /// from transport failure.
    pub async fn find_by_filename(&self, filename: &str) -> Result<Article> {
        let articles = self.list_articles().await?;
        let article = articles
            .into_iter()
            .find(|a| a.filename == filename)
            .ok_or_else(|| ArticleError::NotFound(filename.to_string()))?;
        self.resolve_content(article).await
    }

    /// The configuration this service was built with
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
