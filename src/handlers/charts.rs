use std::io::{BufRead, Write};

use crate::chart::ChartRenderer;
use crate::error::Result;
use crate::progress;
use crate::prompt::Prompter;
use crate::repositories::{CalorieRepository, ExerciseRepository, GoalRepository};

/// Daily net calories over time, with the calorie goal as a reference line.
pub fn view_caloric_progress<R: BufRead, W: Write>(
    user_id: &str,
    calories: &CalorieRepository,
    goals: &GoalRepository,
    prompter: &mut Prompter<R, W>,
    renderer: &mut impl ChartRenderer,
) -> Result<()> {
    let totals = calories.daily_totals(user_id)?;
    if totals.is_empty() {
        return prompter
            .pause("--- No caloric data found for the user. Press enter to return to menu ---");
    }

    let daily_goal = goals.daily_calorie_goal(user_id)?;
    let chart = progress::caloric_progress_chart(&totals, daily_goal);
    renderer.render(&chart)?;

    prompter.pause("--- Press enter to return to menu ---")
}

/// Percentage of each exercise goal achieved, per category.
pub fn view_exercise_progress<R: BufRead, W: Write>(
    user_id: &str,
    goals: &GoalRepository,
    exercises: &ExerciseRepository,
    prompter: &mut Prompter<R, W>,
    renderer: &mut impl ChartRenderer,
) -> Result<()> {
    let entries = progress::exercise_progress(goals, exercises, user_id)?;
    if entries.is_empty() {
        prompter.say("No exercise goals found. Set exercise goals to track progress.")?;
        return Ok(());
    }

    let chart = progress::exercise_progress_chart(&entries);
    renderer.render(&chart)?;

    prompter.pause("--- Press enter to return to menu ---")
}
