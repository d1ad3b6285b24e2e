use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;
use crate::error::{AppError, Result};

/// The four per-exercise target categories, in chart order.
///
/// Each variant maps to a fixed `goals` column through `column()`, so user
/// input never reaches a SQL identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalAttribute {
    Reps,
    Weight,
    Duration,
    Distance,
}

impl GoalAttribute {
    pub const ALL: [GoalAttribute; 4] = [
        GoalAttribute::Reps,
        GoalAttribute::Weight,
        GoalAttribute::Duration,
        GoalAttribute::Distance,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            GoalAttribute::Reps => "target_reps",
            GoalAttribute::Weight => "target_weight",
            GoalAttribute::Duration => "target_duration",
            GoalAttribute::Distance => "target_distance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalAttribute::Reps => "Reps",
            GoalAttribute::Weight => "Weight",
            GoalAttribute::Duration => "Duration",
            GoalAttribute::Distance => "Distance",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reps" => Ok(GoalAttribute::Reps),
            "weight" => Ok(GoalAttribute::Weight),
            "duration" => Ok(GoalAttribute::Duration),
            "distance" => Ok(GoalAttribute::Distance),
            other => Err(AppError::InvalidInput(format!(
                "unknown goal attribute: {other}"
            ))),
        }
    }
}

/// A goal row: either the per-user daily calorie goal (`exercise_name` is
/// None) or the consolidated targets for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub daily_calorie_goal: Option<f64>,
    pub exercise_name: Option<String>,
    pub target_reps: Option<f64>,
    pub target_weight: Option<f64>,
    pub target_duration: Option<f64>,
    pub target_distance: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn target(&self, attribute: GoalAttribute) -> Option<f64> {
        match attribute {
            GoalAttribute::Reps => self.target_reps,
            GoalAttribute::Weight => self.target_weight,
            GoalAttribute::Duration => self.target_duration,
            GoalAttribute::Distance => self.target_distance,
        }
    }

    pub fn has_targets(&self) -> bool {
        GoalAttribute::ALL.iter().any(|a| self.target(*a).is_some())
    }
}

impl FromSqliteRow for Goal {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            daily_calorie_goal: row.get("daily_calorie_goal")?,
            exercise_name: row.get("exercise_name")?,
            target_reps: row.get("target_reps")?,
            target_weight: row.get("target_weight")?,
            target_duration: row.get("target_duration")?,
            target_distance: row.get("target_distance")?,
            created_at: row.get("created_at")?,
        })
    }
}
