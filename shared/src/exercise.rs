//! Exercise catalog and MET lookup
//!
//! The form offers a fixed list of activities. Only a handful carry a
//! measured MET value; everything else, including names outside the
//! catalog, falls back to [`DEFAULT_MET`]. The MET lookup is exact-name;
//! the lenient [`FromStr`] parse serves the selector and browse endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MET used for any activity without a mapped value
pub const DEFAULT_MET: f64 = 5.0;

/// Activities offered by the exercise selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    Running,
    Walking,
    Cycling,
    Yoga,
    Swimming,
    StrengthTraining,
    Aerobics,
    Dancing,
    Hiit,
    Pilates,
    CrossFit,
    Boxing,
    Kickboxing,
    Rowing,
    EllipticalTraining,
    Climbing,
    MartialArts,
    Football,
    Basketball,
    Tennis,
    Badminton,
    TableTennis,
    Skating,
    Skiing,
    JumpRope,
    StairClimbing,
    Stretching,
    Golf,
    Hiking,
    Volleyball,
}

impl ExerciseType {
    /// All activities, in selector order
    pub const ALL: [ExerciseType; 30] = [
        ExerciseType::Running,
        ExerciseType::Walking,
        ExerciseType::Cycling,
        ExerciseType::Yoga,
        ExerciseType::Swimming,
        ExerciseType::StrengthTraining,
        ExerciseType::Aerobics,
        ExerciseType::Dancing,
        ExerciseType::Hiit,
        ExerciseType::Pilates,
        ExerciseType::CrossFit,
        ExerciseType::Boxing,
        ExerciseType::Kickboxing,
        ExerciseType::Rowing,
        ExerciseType::EllipticalTraining,
        ExerciseType::Climbing,
        ExerciseType::MartialArts,
        ExerciseType::Football,
        ExerciseType::Basketball,
        ExerciseType::Tennis,
        ExerciseType::Badminton,
        ExerciseType::TableTennis,
        ExerciseType::Skating,
        ExerciseType::Skiing,
        ExerciseType::JumpRope,
        ExerciseType::StairClimbing,
        ExerciseType::Stretching,
        ExerciseType::Golf,
        ExerciseType::Hiking,
        ExerciseType::Volleyball,
    ];

    /// Display name as shown in the selector
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseType::Running => "Running",
            ExerciseType::Walking => "Walking",
            ExerciseType::Cycling => "Cycling",
            ExerciseType::Yoga => "Yoga",
            ExerciseType::Swimming => "Swimming",
            ExerciseType::StrengthTraining => "Strength Training",
            ExerciseType::Aerobics => "Aerobics",
            ExerciseType::Dancing => "Dancing",
            ExerciseType::Hiit => "HIIT",
            ExerciseType::Pilates => "Pilates",
            ExerciseType::CrossFit => "CrossFit",
            ExerciseType::Boxing => "Boxing",
            ExerciseType::Kickboxing => "Kickboxing",
            ExerciseType::Rowing => "Rowing",
            ExerciseType::EllipticalTraining => "Elliptical Training",
            ExerciseType::Climbing => "Climbing",
            ExerciseType::MartialArts => "Martial Arts",
            ExerciseType::Football => "Football",
            ExerciseType::Basketball => "Basketball",
            ExerciseType::Tennis => "Tennis",
            ExerciseType::Badminton => "Badminton",
            ExerciseType::TableTennis => "Table Tennis",
            ExerciseType::Skating => "Skating",
            ExerciseType::Skiing => "Skiing",
            ExerciseType::JumpRope => "Jump Rope",
            ExerciseType::StairClimbing => "Stair Climbing",
            ExerciseType::Stretching => "Stretching",
            ExerciseType::Golf => "Golf",
            ExerciseType::Hiking => "Hiking",
            ExerciseType::Volleyball => "Volleyball",
        }
    }

    /// Mapped MET value, or `None` when the activity uses the fallback
    pub fn met(&self) -> Option<f64> {
        match self {
            ExerciseType::Running => Some(9.8),
            ExerciseType::Walking => Some(3.8),
            ExerciseType::Cycling => Some(7.5),
            ExerciseType::Yoga => Some(3.0),
            _ => None,
        }
    }

    /// MET value used for calorie estimation
    pub fn effective_met(&self) -> f64 {
        self.met().unwrap_or(DEFAULT_MET)
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ExerciseType::ALL
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown exercise type: {}", s))
    }
}

/// Look up the MET value for an activity name.
///
/// The name must match a selector name exactly; any other spelling,
/// including a different case or surrounding whitespace, resolves to
/// [`DEFAULT_MET`] rather than an error.
pub fn met_value(exercise_type: &str) -> f64 {
    ExerciseType::ALL
        .iter()
        .find(|e| e.name() == exercise_type)
        .map(|e| e.effective_met())
        .unwrap_or(DEFAULT_MET)
}
