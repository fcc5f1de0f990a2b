//! Health metrics calculations module
//!
//! Turns a submitted profile and exercise session into BMI, BMR, calories
//! burned and progress against an hourly energy goal.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Pre-validated Input**: Ranges are enforced by the caller (see `validation`)
//! 3. **Absent, not zero**: A missing exercise duration yields `None`, never `0.0`

use crate::exercise::met_value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Input Types
// ============================================================================

/// Gender as used by the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Signed constant added to the shared BMR base
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

/// Physical attributes collected by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years (1-100)
    pub age_years: u32,
    /// Weight in kilograms (10-200)
    pub weight_kg: f64,
    /// Height in centimeters (100-220)
    pub height_cm: f64,
    pub gender: Gender,
}

/// A single exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Whole hours (0-10)
    pub duration_hours: u32,
    /// Remaining minutes (0-59)
    pub duration_minutes: u32,
    /// Activity name; names outside the catalog are accepted
    pub exercise_type: String,
}

impl ExerciseSession {
    pub fn total_minutes(&self) -> u32 {
        total_minutes(self.duration_hours, self.duration_minutes)
    }
}

// ============================================================================
// BMI
// ============================================================================

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

// ============================================================================
// BMR and Energy Goal
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    base + gender.bmr_offset()
}

/// Hourly share of the daily BMR, used as the session goal
pub fn hourly_goal(bmr: f64) -> f64 {
    bmr / 24.0
}

// ============================================================================
// Exercise Energy
// ============================================================================

/// Total session length in minutes
pub fn total_minutes(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

/// Estimate calories burned for a session
///
/// Formula: kcal = MET × weight(kg) × minutes / 60
///
/// Returns `None` when the session has no duration. Unknown activities use
/// the fallback MET.
pub fn calculate_calories_burned(exercise_type: &str, weight_kg: f64, total_minutes: u32) -> Option<f64> {
    if total_minutes == 0 {
        return None;
    }
    let met = met_value(exercise_type);
    Some(met * weight_kg * f64::from(total_minutes) / 60.0)
}

/// Progress towards the hourly goal as a whole percentage in [0, 100]
pub fn calculate_progress(calories_burned: f64, bmr: f64) -> u8 {
    let goal = hourly_goal(bmr);
    let percent = (calories_burned / goal * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

// ============================================================================
// Combined Result
// ============================================================================

/// All numeric metrics for one submitted form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    pub bmi: f64,
    pub bmr: f64,
    pub total_minutes: u32,
    /// Absent when the session has no duration
    pub calories_burned: Option<f64>,
    pub hourly_goal: f64,
    /// Present only alongside `calories_burned`
    pub progress_percent: Option<u8>,
}

/// Calculate every metric for a profile and session
pub fn calculate_metrics(profile: &UserProfile, session: &ExerciseSession) -> MetricsResult {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let total_minutes = session.total_minutes();
    let calories_burned =
        calculate_calories_burned(&session.exercise_type, profile.weight_kg, total_minutes);
    let progress_percent = calories_burned.map(|kcal| calculate_progress(kcal, bmr));

    MetricsResult {
        bmi,
        bmr,
        total_minutes,
        calories_burned,
        hourly_goal: hourly_goal(bmr),
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(gender: Gender) -> UserProfile {
        UserProfile {
            age_years: 25,
            weight_kg: 70.0,
            height_cm: 170.0,
            gender,
        }
    }

    fn session(hours: u32, minutes: u32, exercise: &str) -> ExerciseSession {
        ExerciseSession {
            duration_hours: hours,
            duration_minutes: minutes,
            exercise_type: exercise.to_string(),
        }
    }

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 170cm -> BMI ~24.22
        let bmi = calculate_bmi(70.0, 170.0);
        assert!((bmi - 24.22).abs() < 0.01);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI is positive and finite across the form's ranges
        #[test]
        fn prop_bmi_positive_and_finite(weight in 10.0f64..=200.0, height in 100.0f64..=220.0) {
            let bmi = calculate_bmi(weight, height);
            prop_assert!(bmi > 0.0);
            prop_assert!(bmi.is_finite());
        }
    }

    // =========================================================================
    // BMR Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        // 700 + 1062.5 - 125 = 1637.5 before the offset
        let bmr = calculate_bmr(70.0, 170.0, 25, Gender::Male);
        assert_eq!(bmr, 1642.5);

        let bmr = calculate_bmr(70.0, 170.0, 25, Gender::Female);
        assert_eq!(bmr, 1476.5);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert!("other".parse::<Gender>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: male and female BMR differ by exactly 166 kcal
        #[test]
        fn prop_male_female_bmr_gap(
            weight in 10i32..=200,
            height in 100i32..=220,
            age in 1u32..=100
        ) {
            let weight = f64::from(weight);
            let height = f64::from(height);
            let male = calculate_bmr(weight, height, age, Gender::Male);
            let female = calculate_bmr(weight, height, age, Gender::Female);
            prop_assert_eq!(male - female, 166.0);
        }

        /// Property: BMR stays positive, so the hourly goal is a safe divisor
        #[test]
        fn prop_bmr_positive(
            weight in 10.0f64..=200.0,
            height in 100.0f64..=220.0,
            age in 1u32..=100
        ) {
            prop_assert!(calculate_bmr(weight, height, age, Gender::Female) > 0.0);
        }
    }

    // =========================================================================
    // Duration and Calories Tests
    // =========================================================================

    #[test]
    fn test_total_minutes() {
        assert_eq!(total_minutes(0, 0), 0);
        assert_eq!(total_minutes(1, 30), 90);
        assert_eq!(total_minutes(10, 59), 659);
    }

    #[test]
    fn test_calories_running() {
        assert_eq!(calculate_calories_burned("Running", 70.0, 60), Some(686.0));
    }

    #[test]
    fn test_calories_unknown_activity_uses_fallback() {
        assert_eq!(calculate_calories_burned("UnknownActivity", 70.0, 60), Some(350.0));
    }

    #[test]
    fn test_calories_absent_without_duration() {
        assert_eq!(calculate_calories_burned("Running", 70.0, 0), None);
    }

    // =========================================================================
    // Progress Tests
    // =========================================================================

    #[test]
    fn test_progress_rounds() {
        // goal = 2400 / 24 = 100 kcal
        assert_eq!(calculate_progress(42.4, 2400.0), 42);
        assert_eq!(calculate_progress(42.6, 2400.0), 43);
    }

    #[test]
    fn test_progress_clamps_above_goal() {
        assert_eq!(calculate_progress(686.0, 1642.5), 100);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: progress is always within [0, 100]
        #[test]
        fn prop_progress_bounded(kcal in 0.001f64..10_000.0, bmr in 100.0f64..5_000.0) {
            let progress = calculate_progress(kcal, bmr);
            prop_assert!(progress <= 100);
        }

        /// Property: total minutes is hours * 60 + minutes
        #[test]
        fn prop_total_minutes(hours in 0u32..=10, minutes in 0u32..=59) {
            prop_assert_eq!(total_minutes(hours, minutes), hours * 60 + minutes);
        }
    }

    // =========================================================================
    // Combined Metrics Tests
    // =========================================================================

    #[test]
    fn test_metrics_end_to_end() {
        let result = calculate_metrics(&profile(Gender::Male), &session(1, 0, "Running"));

        assert!((result.bmi - 24.22).abs() < 0.01);
        assert_eq!(result.bmr, 1642.5);
        assert_eq!(result.total_minutes, 60);
        assert_eq!(result.calories_burned, Some(686.0));
        assert!((result.hourly_goal - 68.44).abs() < 0.01);
        assert_eq!(result.progress_percent, Some(100));
    }

    #[test]
    fn test_metrics_without_duration() {
        let result = calculate_metrics(&profile(Gender::Female), &session(0, 0, "Yoga"));

        assert_eq!(result.total_minutes, 0);
        assert_eq!(result.calories_burned, None);
        assert_eq!(result.progress_percent, None);
        assert!(result.bmi > 0.0);
        assert!(result.bmr > 0.0);
    }
}
