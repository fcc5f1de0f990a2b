//! Exercise and suggestion catalog routes
//!
//! Lets a client populate the exercise selector and browse every
//! suggestion for a BMI category.

use crate::error::ApiError;
use crate::state::AppState;
use actifit_shared::types::{ExerciseInfo, SuggestionsResponse};
use actifit_shared::{BmiCategory, ExerciseType};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Create exercise catalog routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new().route("/", get(list_exercises))
}

/// Create suggestion catalog routes
pub fn suggestion_routes() -> Router<AppState> {
    Router::new().route("/:category", get(get_suggestions))
}

/// GET /api/v1/exercises - Activities in selector order with MET values
async fn list_exercises() -> Json<Vec<ExerciseInfo>> {
    Json(ExerciseType::ALL.into_iter().map(ExerciseInfo::from).collect())
}

/// GET /api/v1/suggestions/:category - Every suggestion for a category
async fn get_suggestions(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let category: BmiCategory = category.parse().map_err(ApiError::NotFound)?;
    let suggestions = state.classifier().catalog().entries(category).to_vec();

    Ok(Json(SuggestionsResponse {
        category,
        label: category.description().to_string(),
        suggestions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_exercises_in_selector_order() {
        let Json(exercises) = list_exercises().await;
        assert_eq!(exercises.len(), 30);
        assert_eq!(exercises[0].name, "Running");
        assert_eq!(exercises[29].name, "Volleyball");
    }
}
