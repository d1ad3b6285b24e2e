use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::Result;
use crate::models::{CalorieEntry, DailyCalorieTotals};

#[derive(Clone)]
pub struct CalorieRepository {
    pool: DbPool,
}

impl CalorieRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn log_burned(&self, user_id: &str, calories: f64, date: NaiveDate) -> Result<CalorieEntry> {
        self.insert(user_id, Some(calories), None, date)
    }

    pub fn log_consumed(
        &self,
        user_id: &str,
        calories: f64,
        date: NaiveDate,
    ) -> Result<CalorieEntry> {
        self.insert(user_id, None, Some(calories), date)
    }

    fn insert(
        &self,
        user_id: &str,
        burned: Option<f64>,
        consumed: Option<f64>,
        date: NaiveDate,
    ) -> Result<CalorieEntry> {
        let entry = CalorieEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            calories_burned: burned,
            calories_consumed: consumed,
            entry_date: date,
        };

        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO calories (id, user_id, calories_burned, calories_consumed, entry_date)
             VALUES (?, ?, ?, ?, ?)",
            rusqlite::params![
                entry.id,
                entry.user_id,
                entry.calories_burned,
                entry.calories_consumed,
                entry.entry_date,
            ],
        )?;

        Ok(entry)
    }

    pub fn total_burned_on(&self, user_id: &str, date: NaiveDate) -> Result<f64> {
        let conn = self.pool.get()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(calories_burned), 0) FROM calories
             WHERE user_id = ? AND entry_date = ?",
            rusqlite::params![user_id, date],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    pub fn total_consumed_on(&self, user_id: &str, date: NaiveDate) -> Result<f64> {
        let conn = self.pool.get()?;
        let total: f64 = conn.query_row(
            "SELECT COALESCE(SUM(calories_consumed), 0) FROM calories
             WHERE user_id = ? AND entry_date = ?",
            rusqlite::params![user_id, date],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Per-day consumed/burned sums, oldest day first.
    pub fn daily_totals(&self, user_id: &str) -> Result<Vec<DailyCalorieTotals>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT entry_date,
                    COALESCE(SUM(calories_consumed), 0) AS consumed,
                    COALESCE(SUM(calories_burned), 0) AS burned
             FROM calories
             WHERE user_id = ?
             GROUP BY entry_date
             ORDER BY entry_date",
        )?;
        let totals = stmt
            .query_map([user_id], |row| {
                Ok(DailyCalorieTotals {
                    date: row.get("entry_date")?,
                    consumed: row.get("consumed")?,
                    burned: row.get("burned")?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(totals)
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
             VALUES (?, ?, 'pw', 30, 'male', 80, 180, 'maintain', 1800, datetime('now'))",
            rusqlite::params![user_id, format!("user_{user_id}")],
        )
        .unwrap();
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_totals() {
        let pool = setup_test_db();
        create_test_user(&pool, "u1");
        let repo = CalorieRepository::new(pool);
        let today = day(2024, 5, 1);

        let eaten = repo.log_consumed("u1", 2200.0, today).unwrap();
        assert_eq!(eaten.calories_consumed, Some(2200.0));
        assert_eq!(eaten.calories_burned, None);

        repo.log_burned("u1", 500.0, today).unwrap();

        assert_eq!(repo.total_consumed_on("u1", today).unwrap(), 2200.0);
        assert_eq!(repo.total_burned_on("u1", today).unwrap(), 500.0);
    }

    #[test]
    fn test_totals_sum_multiple_rows() {
        let pool = setup_test_db();
        create_test_user(&pool, "u1");
        let repo = CalorieRepository::new(pool);
        let today = day(2024, 5, 1);

        repo.log_consumed("u1", 600.0, today).unwrap();
        repo.log_consumed("u1", 900.0, today).unwrap();
        repo.log_burned("u1", 250.0, today).unwrap();
        repo.log_burned("u1", 150.0, today).unwrap();

        assert_eq!(repo.total_consumed_on("u1", today).unwrap(), 1500.0);
        assert_eq!(repo.total_burned_on("u1", today).unwrap(), 400.0);
    }

    #[test]
    fn test_empty_day_totals_are_zero() {
        let pool = setup_test_db();
        create_test_user(&pool, "u1");
        let repo = CalorieRepository::new(pool);

        assert_eq!(repo.total_consumed_on("u1", day(2024, 5, 1)).unwrap(), 0.0);
        assert_eq!(repo.total_burned_on("u1", day(2024, 5, 1)).unwrap(), 0.0);
    }

    #[test]
    fn test_daily_totals_grouped_and_ordered() {
        let pool = setup_test_db();
        create_test_user(&pool, "u1");
        let repo = CalorieRepository::new(pool);

        repo.log_consumed("u1", 1800.0, day(2024, 5, 2)).unwrap();
        repo.log_consumed("u1", 2200.0, day(2024, 5, 1)).unwrap();
        repo.log_burned("u1", 500.0, day(2024, 5, 1)).unwrap();

        let totals = repo.daily_totals("u1").unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date, day(2024, 5, 1));
        assert_eq!(totals[0].consumed, 2200.0);
        assert_eq!(totals[0].burned, 500.0);
        assert_eq!(totals[1].date, day(2024, 5, 2));
        assert_eq!(totals[1].burned, 0.0);
    }
}
