use chrono::Utc;
use rusqlite::OptionalExtension;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{CreateUser, FitnessGoal, FromSqliteRow, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT * FROM users WHERE id = ?")?;
        let result = stmt.query_row([id], User::from_row).optional()?;
        Ok(result)
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT * FROM users WHERE username = ?")?;
        let result = stmt.query_row([username], User::from_row).optional()?;
        Ok(result)
    }

    /// Plaintext credential check, as the store records it.
    pub fn find_by_credentials(&self, username: &str, password: &str) -> Result<Option<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT * FROM users WHERE username = ? AND password = ?")?;
        let result = stmt
            .query_row([username, password], User::from_row)
            .optional()?;
        Ok(result)
    }

    /// Register a new user. Derives the BMR and the initial daily calorie
    /// goal, and writes the user row plus the goal row in one transaction;
    /// a duplicate username leaves nothing behind.
    pub fn create(&self, details: CreateUser) -> Result<User> {
        if self.find_by_username(&details.username)?.is_some() {
            return Err(AppError::DuplicateUsername(details.username));
        }

        let bmr = metrics::bmr(
            details.gender,
            details.weight_kg,
            details.height_cm,
            details.age,
        );
        let daily_calorie_goal = metrics::goal_calories(bmr, details.fitness_goal);

        let user = User {
            id: Uuid::new_v4().to_string(),
            username: details.username,
            password: details.password,
            age: details.age,
            gender: details.gender,
            weight_kg: details.weight_kg,
            height_cm: details.height_cm,
            fitness_goal: details.fitness_goal,
            bmr,
            created_at: Utc::now(),
        };

        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let inserted = tx.execute(
            "INSERT INTO users (id, username, password, age, gender, weight, height, fitness_goal, bmr, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                user.id,
                user.username,
                user.password,
                user.age,
                user.gender.as_str(),
                user.weight_kg,
                user.height_cm,
                user.fitness_goal.as_str(),
                user.bmr,
                user.created_at,
            ],
        );
        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(AppError::DuplicateUsername(user.username));
            }
            Err(e) => return Err(e.into()),
        }

        tx.execute(
            "INSERT INTO goals (id, user_id, daily_calorie_goal, created_at) VALUES (?, ?, ?, ?)",
            rusqlite::params![
                Uuid::new_v4().to_string(),
                user.id,
                daily_calorie_goal,
                user.created_at,
            ],
        )?;

        tx.commit()?;
        Ok(user)
    }

    /// Record a new weight together with the re-derived BMR and daily
    /// calorie goal. Both tables change together or not at all.
    pub fn update_weight(
        &self,
        user_id: &str,
        weight_kg: f64,
        bmr: f64,
        daily_calorie_goal: f64,
    ) -> Result<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows = tx.execute(
            "UPDATE users SET weight = ?, bmr = ? WHERE id = ?",
            rusqlite::params![weight_kg, bmr, user_id],
        )?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("user {user_id}")));
        }

        tx.execute(
            "UPDATE goals SET daily_calorie_goal = ? WHERE user_id = ? AND exercise_name IS NULL",
            rusqlite::params![daily_calorie_goal, user_id],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Change the fitness goal and re-derive the stored daily calorie goal.
    pub fn update_fitness_goal(
        &self,
        user_id: &str,
        fitness_goal: FitnessGoal,
        daily_calorie_goal: f64,
    ) -> Result<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows = tx.execute(
            "UPDATE users SET fitness_goal = ? WHERE id = ?",
            rusqlite::params![fitness_goal.as_str(), user_id],
        )?;
        if rows == 0 {
            return Err(AppError::NotFound(format!("user {user_id}")));
        }

        tx.execute(
            "UPDATE goals SET daily_calorie_goal = ? WHERE user_id = ? AND exercise_name IS NULL",
            rusqlite::params![daily_calorie_goal, user_id],
        )?;

        tx.commit()?;
        Ok(())
    }
}

pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
