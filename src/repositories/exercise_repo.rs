use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::Result;
use crate::models::{CreateExerciseEntry, ExerciseEntry, FromSqliteRow};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create(&self, user_id: &str, details: CreateExerciseEntry) -> Result<ExerciseEntry> {
        let entry = ExerciseEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: details.name,
            reps: details.reps,
            weight_kg: details.weight_kg,
            duration_min: details.duration_min,
            distance_km: details.distance_km,
            logged_at: Utc::now(),
        };

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO exercises (id, user_id, name, reps, weight, duration, distance, logged_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                entry.id,
                entry.user_id,
                entry.name,
                entry.reps,
                entry.weight_kg,
                entry.duration_min,
                entry.distance_km,
                entry.logged_at,
            ],
        )?;

        Ok(entry)
    }

    /// The most recent logged entry for an exercise name, if any.
    pub fn find_latest_by_name(&self, user_id: &str, name: &str) -> Result<Option<ExerciseEntry>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT * FROM exercises
             WHERE user_id = ? AND name = ?
             ORDER BY logged_at DESC, rowid DESC
             LIMIT 1",
        )?;
        let result = stmt
            .query_row([user_id, name], ExerciseEntry::from_row)
            .optional()?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::migrations::run_migrations_for_tests;

    fn setup_test_db() -> DbPool {
        let pool = create_memory_pool().expect("Failed to create test database");
        run_migrations_for_tests(&pool).expect("Failed to run migrations");
        pool
    }

    fn create_test_user(pool: &DbPool, user_id: &str) {
        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO users (id, username, password, age, gender, weight, height, fitness_goal, bmr, created_at)
             VALUES (?, ?, 'pw', 30, 'female', 60, 165, 'maintain', 1500, datetime('now'))",
            rusqlite::params![user_id, format!("user_{user_id}")],
        )
        .unwrap();
    }

    fn entry(name: &str, reps: i64) -> CreateExerciseEntry {
        CreateExerciseEntry {
            name: name.into(),
            reps,
            weight_kg: 40.0,
            duration_min: 0.0,
            distance_km: 0.0,
        }
    }

    #[test]
    fn test_create_and_fetch_latest() {
        let pool = setup_test_db();
        create_test_user(&pool, "u1");
        let repo = ExerciseRepository::new(pool);

        repo.create("u1", entry("Squat", 5)).unwrap();
        repo.create("u1", entry("Squat", 8)).unwrap();

        let latest = repo.find_latest_by_name("u1", "Squat").unwrap().unwrap();
        assert_eq!(latest.reps, 8);
    }

    #[test]
    fn test_latest_is_scoped_to_user_and_name() {
        let pool = setup_test_db();
        create_test_user(&pool, "u1");
        create_test_user(&pool, "u2");
        let repo = ExerciseRepository::new(pool);

        repo.create("u1", entry("Squat", 5)).unwrap();
        repo.create("u2", entry("Squat", 12)).unwrap();

        let latest = repo.find_latest_by_name("u1", "Squat").unwrap().unwrap();
        assert_eq!(latest.reps, 5);

        assert!(repo.find_latest_by_name("u1", "Deadlift").unwrap().is_none());
    }
}
