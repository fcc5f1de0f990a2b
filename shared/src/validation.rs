//! Input validation functions
//!
//! The form collector clamps every field to a fixed range. Callers that do
//! not go through the form (HTTP, WASM) use these checks before handing
//! values to the engine.

use crate::health_metrics::Gender;

pub const AGE_RANGE: (u32, u32) = (1, 100);
pub const WEIGHT_RANGE_KG: (f64, f64) = (10.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (100.0, 220.0);
pub const MAX_DURATION_HOURS: u32 = 10;
pub const MAX_DURATION_MINUTES: u32 = 59;

/// Validate age in years
pub fn validate_age(age_years: i64) -> Result<(), String> {
    if age_years < i64::from(AGE_RANGE.0) {
        return Err(format!("Age must be at least {}", AGE_RANGE.0));
    }
    if age_years > i64::from(AGE_RANGE.1) {
        return Err(format!("Age must be at most {}", AGE_RANGE.1));
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < WEIGHT_RANGE_KG.0 {
        return Err("Weight must be at least 10 kg".to_string());
    }
    if weight_kg > WEIGHT_RANGE_KG.1 {
        return Err("Weight must be at most 200 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < HEIGHT_RANGE_CM.0 {
        return Err("Height must be at least 100 cm".to_string());
    }
    if height_cm > HEIGHT_RANGE_CM.1 {
        return Err("Height must be at most 220 cm".to_string());
    }
    Ok(())
}

/// Validate the hours part of a duration
pub fn validate_duration_hours(hours: i64) -> Result<(), String> {
    if hours < 0 {
        return Err("Hours cannot be negative".to_string());
    }
    if hours > i64::from(MAX_DURATION_HOURS) {
        return Err(format!("Hours cannot exceed {}", MAX_DURATION_HOURS));
    }
    Ok(())
}

/// Validate the minutes part of a duration
pub fn validate_duration_minutes(minutes: i64) -> Result<(), String> {
    if minutes < 0 {
        return Err("Minutes cannot be negative".to_string());
    }
    if minutes > i64::from(MAX_DURATION_MINUTES) {
        return Err(format!("Minutes cannot exceed {}", MAX_DURATION_MINUTES));
    }
    Ok(())
}

/// Valid gender values
pub const VALID_GENDERS: &[&str] = &["male", "female"];

/// Validate gender
pub fn validate_gender(gender: &str) -> Result<(), String> {
    match gender.parse::<Gender>() {
        Ok(_) => Ok(()),
        Err(_) => Err(format!(
            "Invalid gender. Must be one of: {}",
            VALID_GENDERS.join(", ")
        )),
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" | "age_years" => "Age",
        "weight" | "weight_kg" => "Weight",
        "height" | "height_cm" => "Height",
        "gender" => "Gender",
        "duration_hours" => "Exercise Duration in Hours",
        "duration_minutes" => "Exercise Duration in Minutes",
        "exercise_type" => "Exercise Type",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
