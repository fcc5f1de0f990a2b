//! ActiFit WASM Module
//!
//! Browser bindings for the shared engine, so the planner form can compute
//! results without a round trip to the backend.

use actifit_shared::types::{AssessmentRequest, AssessmentResponse};
use actifit_shared::{
    assess, calculate_bmr, classify_bmi, classify_performance, FeedbackClassifier, Gender,
    DEFAULT_SUGGESTION_COUNT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
///
/// The form bounds height to 100-220 cm before calling.
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    actifit_shared::calculate_bmi(weight_kg, height_cm)
}

/// Calculate BMR using the Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    calculate_bmr(weight_kg, height_cm, age_years, gender)
}

/// Estimate calories burned; `undefined` when the duration is zero
#[wasm_bindgen]
pub fn calculate_calories_burned(exercise_type: &str, weight_kg: f64, total_minutes: u32) -> Option<f64> {
    actifit_shared::calculate_calories_burned(exercise_type, weight_kg, total_minutes)
}

/// Progress towards the hourly goal, 0-100
#[wasm_bindgen]
pub fn calculate_progress(calories_burned: f64, bmr: f64) -> u8 {
    actifit_shared::calculate_progress(calories_burned, bmr)
}

/// BMI category key ("underweight", "normal", "overweight", "obese")
#[wasm_bindgen]
pub fn bmi_category(bmi: f64) -> String {
    classify_bmi(bmi).to_string()
}

/// Performance tier key ("low", "moderate", "high")
#[wasm_bindgen]
pub fn performance_tier(calories_burned: f64) -> String {
    classify_performance(calories_burned).to_string()
}

/// Run a full assessment on a JSON form submission
///
/// `seed` drives suggestion sampling, so the page can reproduce a draw.
/// Returns the response as JSON, or throws with the validation message.
#[wasm_bindgen]
pub fn assess_form(form_json: &str, seed: u32) -> Result<String, JsValue> {
    assess_json(form_json, u64::from(seed)).map_err(|msg| JsValue::from_str(&msg))
}

fn assess_json(form_json: &str, seed: u64) -> Result<String, String> {
    let req: AssessmentRequest =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form data: {}", e))?;
    let (profile, session) = req.into_inputs().map_err(|e| e.user_message())?;

    let classifier = FeedbackClassifier::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let report = assess(&profile, &session, &classifier, DEFAULT_SUGGESTION_COUNT, &mut rng);

    serde_json::to_string(&AssessmentResponse::from(report)).map_err(|e| e.to_string())
}
