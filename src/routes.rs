//! Routing surface
//!
//! Two routes: the article list at the root, and `articles/:filename` for
//! the detail view. Unmatched paths redirect to the list.

/// A resolved navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Root route: the article list
    List,
    /// Detail route for one article
    Detail {
        /// The article's `filename` routing key
        filename: String,
    },
}

impl Route {
    /// Build the detail route for an article filename
    pub fn detail(filename: impl Into<String>) -> Self {
        Self::Detail {
            filename: filename.into(),
        }
    }

    /// Parse a path into a route; anything unmatched redirects to the list
    pub fn parse(path: &str) -> Self {
        let mut segments = path.trim_matches('/').split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Self::List,
            (Some("articles"), Some(filename), None) => Self::detail(filename),
            _ => Self::List,
        }
    }

    /// Render the route back to a path
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Detail { filename } => format!("/articles/{filename}"),
        }
    }
}
