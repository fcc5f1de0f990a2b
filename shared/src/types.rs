//! API request and response types

use crate::assessment::AssessmentReport;
use crate::catalog::Suggestion;
use crate::exercise::ExerciseType;
use crate::feedback::{BmiCategory, PerformanceTier};
use crate::health_metrics::{ExerciseSession, Gender, UserProfile};
use crate::validation::{
    validate_age, validate_duration_hours, validate_duration_minutes, validate_gender,
    validate_height_cm, validate_weight, ValidationError,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Assessment
// ============================================================================

/// Raw form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub age: i64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: String,
    #[serde(default)]
    pub duration_hours: i64,
    #[serde(default)]
    pub duration_minutes: i64,
    pub exercise_type: String,
}

impl AssessmentRequest {
    /// Check every field against the form's ranges and build engine inputs
    pub fn into_inputs(self) -> Result<(UserProfile, ExerciseSession), ValidationError> {
        check("age", validate_age(self.age))?;
        check("weight_kg", validate_weight(self.weight_kg))?;
        check("height_cm", validate_height_cm(self.height_cm))?;
        check("gender", validate_gender(&self.gender))?;
        check("duration_hours", validate_duration_hours(self.duration_hours))?;
        check("duration_minutes", validate_duration_minutes(self.duration_minutes))?;

        let gender: Gender = self
            .gender
            .parse()
            .map_err(|e: String| ValidationError::new("gender", &e))?;

        // Ranges were checked above, so the narrowing casts are lossless
        let profile = UserProfile {
            age_years: self.age as u32,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            gender,
        };
        let session = ExerciseSession {
            duration_hours: self.duration_hours as u32,
            duration_minutes: self.duration_minutes as u32,
            exercise_type: self.exercise_type,
        };
        Ok((profile, session))
    }
}

fn check(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|msg| ValidationError::new(field, &msg))
}

/// Assessment returned to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub bmi: f64,
    pub bmr: f64,
    pub total_minutes: u32,
    pub hourly_goal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_tier: Option<PerformanceTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_message: Option<String>,
    pub bmi_category: BmiCategory,
    pub bmi_category_label: String,
    pub suggestions: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_error: Option<String>,
}

impl From<AssessmentReport> for AssessmentResponse {
    fn from(report: AssessmentReport) -> Self {
        Self {
            feedback_message: report.feedback_message().map(str::to_string),
            bmi: report.bmi,
            bmr: report.bmr,
            total_minutes: report.total_minutes,
            hourly_goal: report.hourly_goal,
            calories_burned: report.calories_burned,
            progress_percent: report.progress_percent,
            performance_tier: report.performance_tier,
            bmi_category: report.bmi_category,
            bmi_category_label: report.bmi_category.description().to_string(),
            suggestions: report.suggestions,
            duration_error: report.duration_error.map(|e| e.to_string()),
        }
    }
}

// ============================================================================
// Catalogs
// ============================================================================

/// Selector entry for an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub name: String,
    pub met: f64,
    /// True when the MET value is the fallback rather than a mapped value
    pub default_met: bool,
}

impl From<ExerciseType> for ExerciseInfo {
    fn from(exercise: ExerciseType) -> Self {
        Self {
            name: exercise.name().to_string(),
            met: exercise.effective_met(),
            default_met: exercise.met().is_none(),
        }
    }
}

/// Full suggestion list for one BMI category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub category: BmiCategory,
    pub label: String,
    pub suggestions: Vec<Suggestion>,
}
