//! Common test utilities for integration tests
//!
//! Builds the full router in memory and drives it with `oneshot`.

#![allow(dead_code)]

use actifit_backend::{config::AppConfig, routes, state::AppState};
use actifit_shared::SuggestionCatalog;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(SuggestionCatalog::default())
    }

    /// Create a test application with a specific catalog
    pub fn with_catalog(catalog: SuggestionCatalog) -> Self {
        let state = AppState::new(catalog, test_config());
        let app = routes::create_router(state);
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: actifit_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        suggestions: actifit_backend::config::SuggestionsConfig::default(),
    }
}
