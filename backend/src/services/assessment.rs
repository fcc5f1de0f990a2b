//! Assessment service - runs the engine for one form submission
//!
//! Validates the raw request, hands the typed inputs to the shared engine
//! and shapes the report for the renderer.

use crate::error::ApiError;
use actifit_shared::types::{AssessmentRequest, AssessmentResponse};
use actifit_shared::{assess, FeedbackClassifier};
use rand::Rng;
use tracing::{debug, info};

/// Assessment service
pub struct AssessmentService;

impl AssessmentService {
    /// Assess a form submission using the process-wide random stream
    pub fn assess(
        classifier: &FeedbackClassifier,
        suggestion_count: usize,
        req: AssessmentRequest,
    ) -> Result<AssessmentResponse, ApiError> {
        Self::assess_with_rng(classifier, suggestion_count, req, &mut rand::thread_rng())
    }

    /// Assess a form submission with an explicit randomness source
    pub fn assess_with_rng<R: Rng + ?Sized>(
        classifier: &FeedbackClassifier,
        suggestion_count: usize,
        req: AssessmentRequest,
        rng: &mut R,
    ) -> Result<AssessmentResponse, ApiError> {
        let (profile, session) = req.into_inputs().map_err(|err| {
            debug!(field = %err.field, message = %err.message, "Rejected assessment input");
            ApiError::Validation(err)
        })?;

        let report = assess(&profile, &session, classifier, suggestion_count, rng);

        info!(
            exercise = %session.exercise_type,
            total_minutes = report.total_minutes,
            bmi_category = %report.bmi_category,
            performance_tier = ?report.performance_tier,
            missing_duration = report.duration_error.is_some(),
            "Assessment computed"
        );

        Ok(report.into())
    }
}
