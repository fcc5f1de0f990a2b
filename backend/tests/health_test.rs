//! Integration tests for health check endpoints

mod common;

use actifit_shared::SuggestionCatalog;
use axum::http::StatusCode;
use rstest::rstest;

#[tokio::test]
async fn test_health_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_liveness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alive"));
}

#[tokio::test]
async fn test_readiness_endpoint() {
    let app = common::TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));
}

#[tokio::test]
async fn test_readiness_reports_broken_catalog() {
    let mut catalog = SuggestionCatalog::default();
    catalog.normal.clear();
    let app = common::TestApp::with_catalog(catalog);

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("not_ready"));
    assert!(body.contains("no suggestions for category 'normal'"));
}

#[rstest]
#[case("/api/v1")]
#[case("/api/v1/")]
#[tokio::test]
async fn test_api_v1_root(#[case] path: &str) {
    let app = common::TestApp::new();

    let (status, body) = app.get(path).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ActiFit Planner API v1"));
}
