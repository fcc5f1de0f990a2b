//! Assessment API route

use crate::error::ApiError;
use crate::services::AssessmentService;
use crate::state::AppState;
use actifit_shared::types::{AssessmentRequest, AssessmentResponse};
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

/// Create assessment routes
pub fn assessment_routes() -> Router<AppState> {
    Router::new().route("/", post(create_assessment))
}

/// POST /api/v1/assessment - Compute metrics and feedback for a form
///
/// A zero exercise duration is not an error here: the response is still 200
/// with `duration_error` set and the calorie fields omitted.
async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let response = AssessmentService::assess(state.classifier(), state.suggestion_count(), req)?;
    Ok(Json(response))
}
