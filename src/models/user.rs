use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    /// Anything other than "female" or "male" is rejected so the caller
    /// re-prompts instead of silently defaulting.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            other => Err(AppError::InvalidInput(format!(
                "unsupported gender: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Lose,
    Gain,
    #[default]
    Maintain,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::Lose => "lose",
            FitnessGoal::Gain => "gain",
            FitnessGoal::Maintain => "maintain",
        }
    }

    /// Unrecognized values behave as "maintain".
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" => FitnessGoal::Lose,
            "gain" => FitnessGoal::Gain,
            _ => FitnessGoal::Maintain,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub age: f64,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub fitness_goal: FitnessGoal,
    pub bmr: f64,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let gender_str: String = row.get("gender")?;
        let goal_str: String = row.get("fitness_goal")?;
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            password: row.get("password")?,
            age: row.get("age")?,
            gender: Gender::parse(&gender_str).map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    0,
                    "gender".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?,
            weight_kg: row.get("weight")?,
            height_cm: row.get("height")?,
            fitness_goal: FitnessGoal::parse(&goal_str),
            bmr: row.get("bmr")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Registration details collected at the prompt, before the store assigns
/// an id and the BMR is derived.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub age: f64,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub fitness_goal: FitnessGoal,
}
