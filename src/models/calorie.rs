use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calorie ledger row. Exactly one of `calories_burned` or
/// `calories_consumed` is populated per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieEntry {
    pub id: String,
    pub user_id: String,
    pub calories_burned: Option<f64>,
    pub calories_consumed: Option<f64>,
    pub entry_date: NaiveDate,
}

/// Per-day sums over the calorie ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCalorieTotals {
    pub date: NaiveDate,
    pub consumed: f64,
    pub burned: f64,
}
