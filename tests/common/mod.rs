//! Shared test fixtures: an in-memory transport and manifest builders

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Semaphore};

use articles_rs::{ArticleError, ArticleService, HttpTransport, Result, ServiceConfig};

/// Base URL used by every test service
pub const BASE_URL: &str = "https://blog.test";

/// Canned response for one URL
#[derive(Debug, Clone)]
pub enum FakeResponse {
    /// 200 with this body
    Body(String),
    /// 404
    NotFound,
    /// Connection-level failure
    Fail,
}

/// In-memory [`HttpTransport`] with canned responses, call recording, and an
/// optional gate that holds matching requests until the test releases them
pub struct FakeTransport {
    routes: HashMap<String, FakeResponse>,
    calls: Mutex<Vec<String>>,
    gate: Option<(String, Arc<Semaphore>)>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Register a response for a URL path under [`BASE_URL`]
    pub fn route(mut self, path: &str, response: FakeResponse) -> Self {
        self.routes.insert(url(path), response);
        self
    }

    /// Register the manifest resource at the default path
    pub fn manifest(self, body: &str) -> Self {
        self.route(
            articles_rs::DEFAULT_MANIFEST_PATH,
            FakeResponse::Body(body.to_string()),
        )
    }

    /// Hold every request whose URL ends with `suffix` until `gate` has a
    /// permit to give out
    pub fn gated(mut self, suffix: &str, gate: Arc<Semaphore>) -> Self {
        self.gate = Some((suffix.to_string(), gate));
        self
    }

    /// URLs fetched so far, in request order
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get_text(&self, url: &str) -> Result<Option<String>> {
        self.calls.lock().await.push(url.to_string());

        if let Some((suffix, gate)) = &self.gate {
            if url.ends_with(suffix.as_str()) {
                let permit = gate.acquire().await.expect("gate closed");
                permit.forget();
            }
        }

        match self.routes.get(url) {
            Some(FakeResponse::Body(body)) => Ok(Some(body.clone())),
            Some(FakeResponse::NotFound) | None => Ok(None),
            Some(FakeResponse::Fail) => {
                Err(ArticleError::transport(url, "simulated connection failure"))
            }
        }
    }
}

/// Absolute URL for a path under [`BASE_URL`]
pub fn url(path: &str) -> String {
    format!("{}/{}", BASE_URL, path.trim_start_matches('/'))
}

/// Service wired to the given fake transport with the default trust policy
pub fn service_with(transport: FakeTransport) -> (ArticleService, Arc<FakeTransport>) {
    let transport = Arc::new(transport);
    let service = ArticleService::with_parts(
        ServiceConfig::new(BASE_URL),
        transport.clone(),
        Arc::new(articles_rs::TrustPolicy),
    );
    (service, transport)
}

/// Manifest body with one record per (filename, path) pair
pub fn manifest_of(entries: &[(&str, &str)]) -> String {
    let records: Vec<String> = entries
        .iter()
        .map(|(filename, path)| {
            format!(
                r#"{{"title":"{filename} title","filename":"{filename}","path":"{path}","description":"about {filename}","date":"2024-01-01","tags":["test"]}}"#
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}
