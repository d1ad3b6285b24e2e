use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::Result;
use crate::models::{FromSqliteRow, Goal, GoalAttribute};

#[derive(Clone)]
pub struct GoalRepository {
    pool: DbPool,
}

impl GoalRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn find_by_exercise(&self, user_id: &str, exercise_name: &str) -> Result<Option<Goal>> {
        let conn = self.pool.get()?;
        let mut stmt =
            conn.prepare("SELECT * FROM goals WHERE user_id = ? AND exercise_name = ?")?;
        let result = stmt
            .query_row([user_id, exercise_name], Goal::from_row)
            .optional()?;
        Ok(result)
    }

    /// Upsert one target attribute for an exercise. All targets for an
    /// exercise live on a single row, so setting one attribute never
    /// disturbs the others.
    pub fn set_target(
        &self,
        user_id: &str,
        exercise_name: &str,
        attribute: GoalAttribute,
        value: f64,
    ) -> Result<()> {
        let conn = self.pool.get()?;

        // attribute.column() comes from a fixed table, never from input
        let updated = conn.execute(
            &format!(
                "UPDATE goals SET {} = ? WHERE user_id = ? AND exercise_name = ?",
                attribute.column()
            ),
            rusqlite::params![value, user_id, exercise_name],
        )?;

        if updated == 0 {
            conn.execute(
                &format!(
                    "INSERT INTO goals (id, user_id, exercise_name, {}, created_at)
                     VALUES (?, ?, ?, ?, ?)",
                    attribute.column()
                ),
                rusqlite::params![
                    Uuid::new_v4().to_string(),
                    user_id,
                    exercise_name,
                    value,
                    Utc::now(),
                ],
            )?;
        }

        Ok(())
    }

    /// Goal rows with at least one populated target, in insertion order.
    pub fn find_with_targets(&self, user_id: &str) -> Result<Vec<Goal>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM goals
             WHERE user_id = ?
               AND (target_reps IS NOT NULL
                 OR target_weight IS NOT NULL
                 OR target_duration IS NOT NULL
                 OR target_distance IS NOT NULL)
             ORDER BY rowid",
        )?;
        let goals = stmt
            .query_map([user_id], Goal::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(goals)
    }

    pub fn daily_calorie_goal(&self, user_id: &str) -> Result<Option<f64>> {
        let conn = self.pool.get()?;
        let result: Option<Option<f64>> = conn
            .query_row(
                "SELECT daily_calorie_goal FROM goals
                 WHERE user_id = ? AND exercise_name IS NULL",
                [user_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(result.flatten())
    }
}
