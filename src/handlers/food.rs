use chrono::Local;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::prompt::Prompter;
use crate::repositories::{CalorieRepository, GoalRepository};

/// Log calories eaten and show the day's running total against the goal.
pub fn log_food<R: BufRead, W: Write>(
    user_id: &str,
    calories: &CalorieRepository,
    goals: &GoalRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--- Log Food ---")?;
    let eaten = prompter.number("Enter calories eaten: ")?;

    if eaten <= 0.0 {
        prompter.say("Invalid input for calories. Please enter a valid number greater than 0.")?;
        return Ok(());
    }

    let today = Local::now().date_naive();
    calories.log_consumed(user_id, eaten, today)?;
    prompter.say("--- Food logged successfully! ---")?;

    let total = calories.total_consumed_on(user_id, today)?;
    prompter.say(&format!("Total calories eaten for the day: {total}"))?;

    match goals.daily_calorie_goal(user_id)? {
        Some(goal) => prompter.say(&format!("Daily calorie goal: {}", goal as i64))?,
        None => prompter.say("No daily calorie goal set.")?,
    }

    prompter.pause("--- Press enter to return to menu ---")
}
