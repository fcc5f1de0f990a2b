//! Single-shot assessment of a submitted form
//!
//! Runs the metrics calculation, then the feedback classification, and
//! returns everything the renderer needs in one report.

use crate::catalog::Suggestion;
use crate::errors::AssessmentError;
use crate::feedback::{BmiCategory, FeedbackClassifier, PerformanceTier};
use crate::health_metrics::{calculate_metrics, ExerciseSession, UserProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Complete result for one form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub bmi: f64,
    pub bmr: f64,
    pub total_minutes: u32,
    pub hourly_goal: f64,
    pub calories_burned: Option<f64>,
    pub progress_percent: Option<u8>,
    pub performance_tier: Option<PerformanceTier>,
    pub bmi_category: BmiCategory,
    pub suggestions: Vec<Suggestion>,
    /// Set when the session has no duration
    pub duration_error: Option<AssessmentError>,
}

impl AssessmentReport {
    /// Feedback text for the performance tier, if one was assigned
    pub fn feedback_message(&self) -> Option<&'static str> {
        self.performance_tier.map(|tier| tier.message())
    }
}

/// Assess a profile and session
///
/// BMI, BMR, the BMI category and suggestions are always populated. Calories,
/// progress and the performance tier are only present when the session has a
/// duration; otherwise `duration_error` is set.
pub fn assess<R: Rng + ?Sized>(
    profile: &UserProfile,
    session: &ExerciseSession,
    classifier: &FeedbackClassifier,
    suggestion_count: usize,
    rng: &mut R,
) -> AssessmentReport {
    let metrics = calculate_metrics(profile, session);
    let bmi_category = classifier.classify_bmi(metrics.bmi);
    let performance_tier = metrics
        .calories_burned
        .map(|kcal| classifier.classify_performance(kcal));
    let duration_error = match metrics.calories_burned {
        Some(_) => None,
        None => Some(AssessmentError::MissingDuration),
    };
    let suggestions = classifier.select_suggestions(bmi_category, suggestion_count, rng);

    AssessmentReport {
        bmi: metrics.bmi,
        bmr: metrics.bmr,
        total_minutes: metrics.total_minutes,
        hourly_goal: metrics.hourly_goal,
        calories_burned: metrics.calories_burned,
        progress_percent: metrics.progress_percent,
        performance_tier,
        bmi_category,
        suggestions,
        duration_error,
    }
}
