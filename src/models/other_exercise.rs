use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::FromSqliteRow;
use crate::metrics::Intensity;

/// A non-weightlifting exercise with calories-per-minute coefficients for
/// each intensity tier. Rows with a NULL `user_id` form the shared catalog;
/// rows with a user id are that user's custom additions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherExercise {
    pub id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub light_intensity: f64,
    pub moderate_intensity: f64,
    pub intense_intensity: f64,
    pub created_at: DateTime<Utc>,
}

impl OtherExercise {
    pub fn calories_per_minute(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Light => self.light_intensity,
            Intensity::Moderate => self.moderate_intensity,
            Intensity::Intense => self.intense_intensity,
        }
    }
}

impl FromSqliteRow for OtherExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            name: row.get("name")?,
            light_intensity: row.get("light_intensity")?,
            moderate_intensity: row.get("moderate_intensity")?,
            intense_intensity: row.get("intense_intensity")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// The catalog seeded on first access: (name, light, moderate, intense)
/// calories per minute.
pub const DEFAULT_CATALOG: &[(&str, f64, f64, f64)] = &[
    ("Running", 8.0, 11.0, 14.0),
    ("Swimming", 11.0, 14.0, 17.0),
    ("Padel", 5.0, 8.0, 11.0),
    ("Climbing", 7.0, 10.0, 13.0),
];
