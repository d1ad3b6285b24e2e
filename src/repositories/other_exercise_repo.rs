use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use super::user_repo::is_unique_violation;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, OtherExercise, DEFAULT_CATALOG};

#[derive(Clone)]
pub struct OtherExerciseRepository {
    pool: DbPool,
}

impl OtherExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Seed the fixed catalog as global rows. Idempotent: names that
    /// already exist are left alone.
    pub fn ensure_catalog(&self) -> Result<()> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "INSERT OR IGNORE INTO other_exercises
             (id, user_id, name, light_intensity, moderate_intensity, intense_intensity, created_at)
             VALUES (?, NULL, ?, ?, ?, ?, ?)",
        )?;

        for (name, light, moderate, intense) in DEFAULT_CATALOG {
            stmt.execute(rusqlite::params![
                Uuid::new_v4().to_string(),
                name,
                light,
                moderate,
                intense,
                Utc::now(),
            ])?;
        }

        Ok(())
    }

    /// Catalog rows plus the user's own custom exercises, seeding the
    /// catalog first.
    pub fn list_available(&self, user_id: &str) -> Result<Vec<OtherExercise>> {
        self.ensure_catalog()?;

        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM other_exercises
             WHERE user_id = ? OR user_id IS NULL
             ORDER BY name",
        )?;
        let exercises = stmt
            .query_map([user_id], OtherExercise::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(exercises)
    }

    pub fn find_available_by_name(&self, user_id: &str, name: &str) -> Result<Option<OtherExercise>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM other_exercises
             WHERE name = ? AND (user_id = ? OR user_id IS NULL)",
        )?;
        let result = stmt
            .query_row([name, user_id], OtherExercise::from_row)
            .optional()?;
        Ok(result)
    }

    pub fn create_custom(
        &self,
        user_id: &str,
        name: &str,
        light: f64,
        moderate: f64,
        intense: f64,
    ) -> Result<OtherExercise> {
        let exercise = OtherExercise {
            id: Uuid::new_v4().to_string(),
            user_id: Some(user_id.to_string()),
            name: name.to_string(),
            light_intensity: light,
            moderate_intensity: moderate,
            intense_intensity: intense,
            created_at: Utc::now(),
        };

        let conn = self.pool.get()?;
        let inserted = conn.execute(
            "INSERT INTO other_exercises
             (id, user_id, name, light_intensity, moderate_intensity, intense_intensity, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                exercise.id,
                exercise.user_id,
                exercise.name,
                exercise.light_intensity,
                exercise.moderate_intensity,
                exercise.intense_intensity,
                exercise.created_at,
            ],
        );
        match inserted {
            Ok(_) => Ok(exercise),
            Err(e) if is_unique_violation(&e) => Err(AppError::InvalidInput(format!(
                "an exercise named '{name}' already exists"
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
