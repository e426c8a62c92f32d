#![doc = include_str!("../README.md")]

/// Article record and manifest decoding
pub mod article;
/// Summary card presentation
pub mod card;
mod config;
mod detail_view;
mod error;
mod list_view;
/// Markdown-to-HTML conversion
pub mod markdown;
/// Routing surface (list and detail routes)
pub mod routes;
/// Trusted HTML wrapper and sanitization seam
pub mod sanitize;
mod service;
/// HTTP transport seam
pub mod transport;

pub use article::{Article, parse_manifest};
pub use card::ArticleCard;
pub use config::{DEFAULT_MANIFEST_PATH, ServiceConfig};
pub use detail_view::{DetailState, DetailView};
pub use error::{ArticleError, Result};
pub use list_view::ListView;
pub use routes::Route;
pub use sanitize::{RejectScripts, SafeHtml, Sanitizer, TrustPolicy};
pub use service::ArticleService;
pub use transport::{HttpClient, HttpTransport};
