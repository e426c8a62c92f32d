//! Trusted HTML wrapper and the sanitization seam
//!
//! Converted markdown crosses a trust boundary before it reaches a renderer:
//! the service passes every converted fragment through a [`Sanitizer`], and
//! the result is wrapped in [`SafeHtml`]. A renderer receiving `SafeHtml`
//! must treat it as pre-sanitized and bypass its default escaping.

use crate::error::{ArticleError, Result};

/// HTML that has been explicitly marked as safe to render without escaping
///
/// The only way to construct a `SafeHtml` outside this crate is through a
/// [`Sanitizer`], which keeps the trust decision in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub(crate) fn trusted(html: String) -> Self {
        Self(html)
    }

    /// The sanitized HTML fragment
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper, returning the raw HTML
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitization capability injected into the article service
///
/// Implementations inspect converter output and either bless it as
/// [`SafeHtml`] or reject it with [`ArticleError::Conversion`].
pub trait Sanitizer: Send + Sync {
    /// Inspect `html` and wrap it as trusted, or reject it
    fn sanitize(&self, html: &str) -> Result<SafeHtml>;
}

/// Default policy: trust converter output as-is
///
/// The markdown converter only ever emits markup derived from article
/// content the deployment itself publishes, so the default policy marks its
/// output trusted without rewriting it. Swap in a stricter [`Sanitizer`]
/// when article sources are not fully controlled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustPolicy;

impl Sanitizer for TrustPolicy {
    fn sanitize(&self, html: &str) -> Result<SafeHtml> {
        Ok(SafeHtml::trusted(html.to_string()))
    }
}

/// Policy that rejects script and inline event-handler markup
///
/// A lightweight screen for deployments that render third-party manifests.
/// Rejection surfaces as [`ArticleError::Conversion`], failing the affected
/// article's resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectScripts;

impl Sanitizer for RejectScripts {
    fn sanitize(&self, html: &str) -> Result<SafeHtml> {
        let lowered = html.to_ascii_lowercase();
        if lowered.contains("<script") || lowered.contains("javascript:") {
            return Err(ArticleError::Conversion(
                "script content rejected by sanitizer".to_string(),
            ));
        }
        Ok(SafeHtml::trusted(html.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_policy_passes_through() {
        let html = "<h1>Title</h1>\n<p>body</p>\n";
        let safe = TrustPolicy.sanitize(html).unwrap();
        assert_eq!(safe.as_str(), html);
    }

    #[test]
    fn test_reject_scripts_allows_plain_markup() {
        let safe = RejectScripts.sanitize("<p>hello</p>").unwrap();
        assert_eq!(safe.as_str(), "<p>hello</p>");
    }

    #[test]
    fn test_reject_scripts_rejects_script_tag() {
        let err = RejectScripts
            .sanitize("<p>hi</p><SCRIPT>alert(1)</SCRIPT>")
            .unwrap_err();
        assert!(matches!(err, ArticleError::Conversion(_)));
    }

    #[test]
    fn test_safe_html_display_is_unescaped() {
        let safe = TrustPolicy.sanitize("<em>x</em>").unwrap();
        assert_eq!(safe.to_string(), "<em>x</em>");
    }
}
