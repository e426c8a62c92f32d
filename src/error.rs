//! Article retrieval error types

use thiserror::Error;

/// Errors produced while fetching, decoding, or rendering articles
#[derive(Error, Debug)]
pub enum ArticleError {
    /// HTTP fetch of the manifest or an article body failed
    #[error("transport error fetching {url}: {message}")]
    Transport {
        /// The URL that was being fetched
        url: String,
        /// Underlying transport failure description
        message: String,
    },

    /// Manifest body was present but could not be decoded as an article list
    #[error("manifest decode error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Converted HTML was rejected by the sanitizer
    #[error("content conversion failed: {0}")]
    Conversion(String),

    /// No article in the manifest matches the requested filename
    #[error("no article found for filename: {0}")]
    NotFound(String),

    /// A route was activated without its required parameter
    #[error("route is missing required parameter: {0}")]
    MissingParameter(&'static str),
}

impl ArticleError {
    /// Build a transport error for a failed fetch of `url`
    pub fn transport(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias using ArticleError
pub type Result<T> = std::result::Result<T, ArticleError>;
