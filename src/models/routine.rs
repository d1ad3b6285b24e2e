use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;

/// One set of one exercise inside a named routine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineStep {
    pub id: String,
    pub user_id: String,
    pub routine_name: String,
    pub exercise_name: String,
    pub reps: i64,
    pub weight_kg: f64,
    pub set_number: i64,
    pub duration_min: f64,
    pub distance_km: f64,
    pub created_at: DateTime<Utc>,
}

impl RoutineStep {
    /// Human-readable summary of the set, omitting zero-valued attributes.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.reps > 0 {
            parts.push(format!("{} reps", self.reps));
        }
        if self.weight_kg > 0.0 {
            parts.push(format!("{} kg", self.weight_kg));
        }
        if self.duration_min > 0.0 {
            parts.push(format!("{} min", self.duration_min));
        }
        if self.distance_km > 0.0 {
            parts.push(format!("{} km", self.distance_km));
        }
        parts.join(", ")
    }
}

impl FromSqliteRow for RoutineStep {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            routine_name: row.get("routine_name")?,
            exercise_name: row.get("exercise_name")?,
            reps: row.get("reps")?,
            weight_kg: row.get("weight")?,
            set_number: row.get("set_number")?,
            duration_min: row.get("duration")?,
            distance_km: row.get("distance")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoutineStep {
    pub exercise_name: String,
    pub set_number: i64,
    pub reps: i64,
    pub weight_kg: f64,
    pub duration_min: f64,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_omits_zero_attributes() {
        let step = RoutineStep {
            id: "r1".into(),
            user_id: "u1".into(),
            routine_name: "Push Day".into(),
            exercise_name: "Bench Press".into(),
            reps: 8,
            weight_kg: 60.0,
            set_number: 1,
            duration_min: 0.0,
            distance_km: 0.0,
            created_at: Utc::now(),
        };

        assert_eq!(step.describe(), "8 reps, 60 kg");
    }

    #[test]
    fn test_describe_duration_only() {
        let step = RoutineStep {
            id: "r2".into(),
            user_id: "u1".into(),
            routine_name: "Cardio".into(),
            exercise_name: "Rowing".into(),
            reps: 0,
            weight_kg: 0.0,
            set_number: 1,
            duration_min: 20.0,
            distance_km: 5.0,
            created_at: Utc::now(),
        };

        assert_eq!(step.describe(), "20 min, 5 km");
    }
}
