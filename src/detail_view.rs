//! Article detail view
//!
//! Driven by the `articles/:filename` route parameter. Every new parameter
//! emission re-runs resolution from scratch; deactivation suppresses any
//! state transition from a resolution still in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::article::Article;
use crate::error::ArticleError;
use crate::service::ArticleService;

/// Detail view state machine
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Resolution in progress (initial state)
    Loading,
    /// Article resolved and ready to render
    Loaded(Article),
    /// Resolution failed or the route parameter was missing
    Error,
}

impl DetailState {
    /// Whether the view is waiting on a resolution
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Detail view over a single resolved article
pub struct DetailView {
    service: Arc<ArticleService>,
    state: Mutex<DetailState>,
    destroyed: AtomicBool,
}

impl DetailView {
    /// Create a detail view in the `Loading` state
    pub fn new(service: Arc<ArticleService>) -> Self {
        Self {
            service,
            state: Mutex::new(DetailState::Loading),
            destroyed: AtomicBool::new(false),
        }
    }

    /// Handle one route-parameter emission
    ///
    /// A missing parameter transitions straight to `Error` without calling
    /// the service. A present parameter re-enters `Loading` and resolves
    /// the article; success transitions to `Loaded`, any failure
    /// (`NotFound` included) to `Error`. All failure kinds collapse to the
    /// same `Error` state on this surface.
    pub async fn on_route_param(&self, filename: Option<&str>) {
        let Some(filename) = filename else {
            warn!("{}", ArticleError::MissingParameter("filename"));
            self.set_state(DetailState::Error).await;
            return;
        };
        self.load(filename).await;
    }

    async fn load(&self, filename: &str) {
        self.set_state(DetailState::Loading).await;

        let result = self.service.find_by_filename(filename).await;
        match result {
            Ok(article) => {
                debug!("detail view loaded {}", filename);
                self.set_state(DetailState::Loaded(article)).await;
            }
            Err(e) => {
                warn!("detail view failed to load {}: {}", filename, e);
                self.set_state(DetailState::Error).await;
            }
        }
    }

    // All transitions funnel through here so a deactivated view can never
    // be mutated by a late resolution.
    async fn set_state(&self, next: DetailState) {
        if self.destroyed.load(Ordering::SeqCst) {
            return;
        }
        *self.state.lock().await = next;
    }

    /// Current view state
    pub async fn state(&self) -> DetailState {
        self.state.lock().await.clone()
    }

    /// The resolved article, if the view is in `Loaded`
    pub async fn article(&self) -> Option<Article> {
        match &*self.state.lock().await {
            DetailState::Loaded(article) => Some(article.clone()),
            _ => None,
        }
    }

    /// Deactivate the view, discarding results of any in-flight resolution
    ///
    /// Consumer-side only: the network request is not aborted, its eventual
    /// result is dropped.
    pub fn deactivate(&self) {
        self.destroyed.store(true, Ordering::SeqCst);
    }
}
