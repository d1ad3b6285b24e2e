//! Caloric metric calculations.
//!
//! Everything here is a pure function over validated inputs; parsing user
//! input into the enums happens at the prompt boundary and is the only
//! place these computations can fail.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{FitnessGoal, Gender, OtherExercise};

/// Calorie adjustment applied to the BMR for a lose/gain fitness goal.
const GOAL_CALORIE_DELTA: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    Intense,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Light => "Light",
            Intensity::Moderate => "Moderate",
            Intensity::Intense => "Intense",
        }
    }

    /// Parse a menu selection ("1. Light, 2. Moderate, 3. Intense").
    pub fn from_choice(choice: &str) -> Result<Self> {
        match choice.trim() {
            "1" => Ok(Intensity::Light),
            "2" => Ok(Intensity::Moderate),
            "3" => Ok(Intensity::Intense),
            other => Err(AppError::InvalidIntensity(other.to_string())),
        }
    }
}

/// Basal metabolic rate (Harris-Benedict), calories per day.
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    match gender {
        Gender::Female => 655.1 + 9.563 * weight_kg + 1.850 * height_cm - 4.676 * age_years,
        Gender::Male => 66.47 + 13.75 * weight_kg + 5.003 * height_cm - 6.755 * age_years,
    }
}

/// Daily calorie goal derived from the BMR and the user's fitness goal.
pub fn goal_calories(bmr: f64, fitness_goal: FitnessGoal) -> f64 {
    match fitness_goal {
        FitnessGoal::Lose => bmr - GOAL_CALORIE_DELTA,
        FitnessGoal::Gain => bmr + GOAL_CALORIE_DELTA,
        FitnessGoal::Maintain => bmr,
    }
}

/// Calories burned in a weightlifting session.
pub fn weightlifting_calories(intensity: Intensity, duration_min: f64) -> f64 {
    let per_minute = match intensity {
        Intensity::Light => 4.0,
        Intensity::Moderate => 6.0,
        Intensity::Intense => 10.0,
    };
    per_minute * duration_min
}

/// Calories burned doing a catalog or custom exercise at the given tier.
pub fn other_exercise_calories(
    exercise: &OtherExercise,
    intensity: Intensity,
    duration_min: f64,
) -> f64 {
    exercise.calories_per_minute(intensity) * duration_min
}

/// Net calories for a day.
pub fn net_daily_calories(consumed: f64, burned: f64) -> f64 {
    consumed - burned
}
