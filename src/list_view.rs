//! Article list view
//!
//! State machine is `Loading → Loaded` only. A failed load leaves the view
//! in `Loading`; there is deliberately no error state on this surface, the
//! failure is only logged.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::warn;

use crate::article::Article;
use crate::service::ArticleService;

/// List view over all resolved articles
pub struct ListView {
    service: Arc<ArticleService>,
    articles: Mutex<Vec<Article>>,
    loading: AtomicBool,
    destroyed: AtomicBool,
}

impl ListView {
    /// Create a list view in the `Loading` state
    pub fn new(service: Arc<ArticleService>) -> Self {
        Self {
            service,
            articles: Mutex::new(Vec::new()),
            loading: AtomicBool::new(true),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Activate the view: fetch all articles with content and render them
    ///
    /// On success the in-memory list is replaced and the view transitions
    /// to `Loaded`. On failure the view stays in `Loading`. Either way,
    /// nothing is mutated after [`deactivate`](Self::deactivate).
    pub async fn activate(&self) {
        if self.destroyed.load(Ordering::SeqCst) {
            return;
        }

        match self.service.list_articles_with_content().await {
            Ok(articles) => {
                if self.destroyed.load(Ordering::SeqCst) {
                    return;
                }
                *self.articles.lock().await = articles;
                self.loading.store(false, Ordering::SeqCst);
            }
            Err(e) => {
                warn!("article list load failed: {}", e);
            }
        }
    }

    /// Current article list, in manifest order
    pub async fn articles(&self) -> Vec<Article> {
        self.articles.lock().await.clone()
    }

    /// Whether the view is still waiting for its first successful load
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Deactivate the view, discarding results of any in-flight load
    ///
    /// Consumer-side only: an in-flight request is not aborted, its result
    /// is dropped when it arrives.
    pub fn deactivate(&self) {
        self.destroyed.store(true, Ordering::SeqCst);
    }
}
