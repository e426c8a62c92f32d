//! Article service configuration

use serde::{Deserialize, Serialize};

/// Default manifest location relative to the base URL
pub const DEFAULT_MANIFEST_PATH: &str = "/assets/articles/articles.json";

/// Configuration for [`ArticleService`](crate::ArticleService)
///
/// # Example
///
/// ```
/// use articles_rs::ServiceConfig;
///
/// // Recommended: constructor with the default manifest location
/// let config = ServiceConfig::new("https://blog.example.com");
///
/// // Or point at a custom manifest resource
/// let config = ServiceConfig::with_manifest("https://blog.example.com", "/index.json");
/// ```
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the host serving the manifest and article content
    pub base_url: String,

    /// Manifest resource path, relative to `base_url`
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,
}

fn default_manifest_path() -> String {
    DEFAULT_MANIFEST_PATH.to_string()
}

impl ServiceConfig {
    /// Create a configuration using the default manifest path
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_manifest(base_url, DEFAULT_MANIFEST_PATH)
    }

    /// Create a configuration with an explicit manifest path
    pub fn with_manifest(base_url: impl Into<String>, manifest_path: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(base_url.into()),
            manifest_path: manifest_path.into(),
        }
    }

    /// Absolute URL of the manifest resource
    pub fn manifest_url(&self) -> String {
        self.join(&self.manifest_path)
    }

    /// Absolute URL of an article content resource
    ///
    /// Manifest `path` fields are host-relative (e.g.
    /// `/assets/articles/foo.md`); already-absolute URLs pass through.
    pub fn content_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        self.join(path)
    }

    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
