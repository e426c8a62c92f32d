//! Article record and manifest decoding
//!
//! A manifest is a JSON array of article metadata; content lives in one
//! markdown resource per article. The `filename` field is the unique
//! identifier and the routing key for the detail view.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sanitize::SafeHtml;

/// One article's metadata, plus its rendered content once resolved
///
/// Deserialized straight from the manifest. `rendered_content` never appears
/// in a manifest; it stays `None` until
/// [`ArticleService::resolve_content`](crate::ArticleService::resolve_content)
/// populates it, and is not recomputed for that instance afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Display title
    pub title: String,

    /// Unique identifier across the manifest; the detail-view routing key
    pub filename: String,

    /// Location of the raw markdown content, relative to the manifest host
    pub path: String,

    /// Short summary shown on cards
    #[serde(default)]
    pub description: String,

    /// Publication date, kept as the manifest's literal string
    #[serde(default)]
    pub date: String,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Sanitized HTML, present only after content resolution
    #[serde(skip)]
    pub rendered_content: Option<SafeHtml>,
}

impl Article {
    /// Return this article with `rendered_content` populated
    pub fn with_content(mut self, content: SafeHtml) -> Self {
        self.rendered_content = Some(content);
        self
    }

    /// Whether content resolution has completed for this instance
    pub fn is_resolved(&self) -> bool {
        self.rendered_content.is_some()
    }
}

/// Decode a manifest body into an article list
///
/// An empty body, a literal `null`, or whitespace decodes to an empty list;
/// "no articles" is never an error. Anything else must be a JSON array of
/// article records.
pub fn parse_manifest(body: &str) -> Result<Vec<Article>> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let articles: Vec<Article> = serde_json::from_str(trimmed)?;
    Ok(articles)
}
