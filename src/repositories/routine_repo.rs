use chrono::Utc;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{CreateRoutineStep, FromSqliteRow, RoutineStep};

#[derive(Clone)]
pub struct RoutineRepository {
    pool: DbPool,
}

impl RoutineRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn name_exists(&self, user_id: &str, routine_name: &str) -> Result<bool> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM routines WHERE user_id = ? AND routine_name = ?",
            [user_id, routine_name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Insert a whole routine in one transaction: either every set row
    /// persists, or none do. Duplicate routine names are rejected up front.
    pub fn create(
        &self,
        user_id: &str,
        routine_name: &str,
        steps: &[CreateRoutineStep],
    ) -> Result<()> {
        if steps.is_empty() {
            return Ok(());
        }
        if self.name_exists(user_id, routine_name)? {
            return Err(AppError::DuplicateRoutine(routine_name.to_string()));
        }

        let now = Utc::now();
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO routines
                 (id, user_id, routine_name, exercise_name, reps, weight, set_number, duration, distance, created_at)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;

            for step in steps {
                stmt.execute(rusqlite::params![
                    Uuid::new_v4().to_string(),
                    user_id,
                    routine_name,
                    step.exercise_name,
                    step.reps,
                    step.weight_kg,
                    step.set_number,
                    step.duration_min,
                    step.distance_km,
                    now,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    pub fn routine_names(&self, user_id: &str) -> Result<Vec<String>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT routine_name FROM routines WHERE user_id = ? ORDER BY routine_name",
        )?;
        let names = stmt
            .query_map([user_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    pub fn steps_for(&self, user_id: &str, routine_name: &str) -> Result<Vec<RoutineStep>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM routines
             WHERE user_id = ? AND routine_name = ?
             ORDER BY exercise_name, set_number",
        )?;
        let steps = stmt
            .query_map([user_id, routine_name], RoutineStep::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(steps)
    }
}
