//! Route definitions for the ActiFit API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod assessment;
mod catalog;
mod health;

pub use assessment::assessment_routes;
pub use catalog::{exercise_routes, suggestion_routes};

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        // Banner answers with and without the trailing slash
        .route("/api/v1", get(api_banner))
        .route("/api/v1/", get(api_banner))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn api_banner() -> &'static str {
    "ActiFit Planner API v1"
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assessment", assessment_routes())
        .nest("/exercises", exercise_routes())
        .nest("/suggestions", suggestion_routes())
}
