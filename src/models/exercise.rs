use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{FromSqliteRow, GoalAttribute};

/// One logged "best set" for an exercise. Attributes that don't apply to
/// the exercise are recorded as 0, never NULL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub reps: i64,
    pub weight_kg: f64,
    pub duration_min: f64,
    pub distance_km: f64,
    pub logged_at: DateTime<Utc>,
}

impl ExerciseEntry {
    /// The logged value for a goal category, as a float for progress math.
    pub fn value(&self, attribute: GoalAttribute) -> f64 {
        match attribute {
            GoalAttribute::Reps => self.reps as f64,
            GoalAttribute::Weight => self.weight_kg,
            GoalAttribute::Duration => self.duration_min,
            GoalAttribute::Distance => self.distance_km,
        }
    }
}

impl FromSqliteRow for ExerciseEntry {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            reps: row.get("reps")?,
            weight_kg: row.get("weight")?,
            duration_min: row.get("duration")?,
            distance_km: row.get("distance")?,
            logged_at: row.get("logged_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateExerciseEntry {
    pub name: String,
    pub reps: i64,
    pub weight_kg: f64,
    pub duration_min: f64,
    pub distance_km: f64,
}
