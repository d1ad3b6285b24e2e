use std::io::{BufRead, Write};

use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::{FitnessGoal, GoalAttribute, User};
use crate::prompt::Prompter;
use crate::repositories::{GoalRepository, UserRepository};

/// Profile submenu: weight, per-exercise goal targets, fitness goal.
pub fn update_profile<R: BufRead, W: Write>(
    user_id: &str,
    users: &UserRepository,
    goals: &GoalRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--- Update Profile ---")?;
    prompter.say("1. Update Weight")?;
    prompter.say("2. Add an Exercise Goal")?;
    prompter.say("3. Update Fitness Goal")?;
    prompter.say("4. Back")?;

    match prompter
        .choice("Select an option: ", &["1", "2", "3", "4"])?
        .as_str()
    {
        "1" => update_weight(user_id, users, prompter),
        "2" => add_exercise_goal(user_id, goals, prompter),
        "3" => update_fitness_goal(user_id, users, prompter),
        _ => Ok(()),
    }
}

/// New weight re-derives the BMR and the stored daily calorie goal.
fn update_weight<R: BufRead, W: Write>(
    user_id: &str,
    users: &UserRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let new_weight = prompter.number("Enter your new weight (kg): ")?;
    let user = fetch_user(users, user_id)?;

    let new_bmr = metrics::bmr(user.gender, new_weight, user.height_cm, user.age);
    let new_goal = metrics::goal_calories(new_bmr, user.fitness_goal);
    users.update_weight(user_id, new_weight, new_bmr, new_goal)?;

    prompter.pause("--- Weight and BMR updated successfully. Press enter to return to menu ---")
}

fn add_exercise_goal<R: BufRead, W: Write>(
    user_id: &str,
    goals: &GoalRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let exercise_name = prompter.line("Enter the exercise name: ")?;
    let attribute = GoalAttribute::parse(&prompter.choice(
        "Enter the goal attribute (reps, weight, duration, distance): ",
        &["reps", "weight", "duration", "distance"],
    )?)?;
    let value = prompter.number(&format!("Enter target {}: ", attribute.label()))?;

    goals.set_target(user_id, &exercise_name, attribute, value)?;
    prompter.pause("--- Exercise goal added successfully! Press enter to return to menu ---")
}

/// Changing the fitness goal re-derives the daily calorie goal from the
/// stored BMR.
fn update_fitness_goal<R: BufRead, W: Write>(
    user_id: &str,
    users: &UserRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let fitness_goal = FitnessGoal::parse(&prompter.choice(
        "Enter your new fitness goal (lose/gain/maintain): ",
        &["lose", "gain", "maintain"],
    )?);

    let user = fetch_user(users, user_id)?;
    let new_goal = metrics::goal_calories(user.bmr, fitness_goal);
    users.update_fitness_goal(user_id, fitness_goal, new_goal)?;

    prompter.pause("--- Fitness goal updated successfully. Press enter to return to menu ---")
}

fn fetch_user(users: &UserRepository, user_id: &str) -> Result<User> {
    users
        .find_by_id(user_id)?
        .ok_or_else(|| AppError::NotFound(format!("user {user_id}")))
}
