use chrono::Local;
use std::io::{BufRead, Write};

use crate::error::{AppError, Result};
use crate::metrics::{self, Intensity};
use crate::prompt::Prompter;
use crate::repositories::{CalorieRepository, OtherExerciseRepository};

/// Log a workout as calories burned: entered manually, derived from a
/// weightlifting session, or derived from a catalog/custom exercise.
pub fn log_workout<R: BufRead, W: Write>(
    user_id: &str,
    calories: &CalorieRepository,
    other_exercises: &OtherExerciseRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--- Log Workout ---")?;
    prompter.say("1. Enter manually")?;
    prompter.say("2. Select from listed exercises")?;
    let option = prompter.choice("Select an option: ", &["1", "2"])?;

    let burned = if option == "1" {
        prompter.number("Enter calories burned: ")?
    } else {
        prompter.say("What type of exercise did you do?")?;
        prompter.say("1. Weights")?;
        prompter.say("2. Other")?;
        match prompter.choice("Select an option: ", &["1", "2"])?.as_str() {
            "1" => weightlifting_session(prompter)?,
            _ => match other_exercise_session(user_id, other_exercises, prompter)? {
                Some(burned) => burned,
                // The user switched to adding a custom exercise instead
                None => return Ok(()),
            },
        }
    };

    let today = Local::now().date_naive();
    calories.log_burned(user_id, burned, today)?;
    prompter.say("Workout logged successfully.")?;

    let total = calories.total_burned_on(user_id, today)?;
    if total > 0.0 {
        prompter.say(&format!("Calories burned today: {total}"))?;
    } else {
        prompter.say("No calories burned today.")?;
    }

    prompter.pause("--- Press enter to return to menu ---")
}

/// Fixed weightlifting tiers. An unrecognized intensity is reported and
/// the session records zero calories.
fn weightlifting_session<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<f64> {
    let raw = prompter.line("Select intensity (1. Light, 2. Moderate, 3. Intense): ")?;
    let duration = prompter.number("How long did you exercise for (minutes)?: ")?;

    match Intensity::from_choice(&raw) {
        Ok(intensity) => Ok(metrics::weightlifting_calories(intensity, duration)),
        Err(e) => {
            tracing::warn!(input = raw, "unrecognized intensity");
            prompter.say(&format!("{e}. Recording zero calories."))?;
            Ok(0.0)
        }
    }
}

/// Pick a catalog/custom exercise and derive calories from its intensity
/// coefficients. Returns None when the user diverts into adding a custom
/// exercise.
fn other_exercise_session<R: BufRead, W: Write>(
    user_id: &str,
    other_exercises: &OtherExerciseRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<f64>> {
    let available = other_exercises.list_available(user_id)?;
    for (index, exercise) in available.iter().enumerate() {
        prompter.say(&format!("{}. {}", index + 1, exercise.name))?;
    }

    let selection = prompter.line(
        "Enter the number corresponding to the exercise (or type 'custom' to add a custom exercise): ",
    )?;

    if selection.eq_ignore_ascii_case("custom") {
        add_custom_exercise(user_id, other_exercises, prompter)?;
        prompter.pause("Press enter to return to menu")?;
        return Ok(None);
    }

    let picked = selection
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| available.get(i));

    let Some(exercise) = picked else {
        let e = AppError::InvalidExercise(selection);
        tracing::warn!("{e}");
        prompter.say(&format!("{e}. Logging workout failed; recording zero calories."))?;
        return Ok(Some(0.0));
    };

    let raw = prompter.line("Select intensity (1. Light, 2. Moderate, 3. Intense): ")?;
    let duration = prompter.number("Enter duration (minutes): ")?;

    match Intensity::from_choice(&raw) {
        Ok(intensity) => Ok(Some(metrics::other_exercise_calories(
            exercise, intensity, duration,
        ))),
        Err(e) => {
            tracing::warn!(input = raw, "unrecognized intensity");
            prompter.say(&format!("{e}. Recording zero calories."))?;
            Ok(Some(0.0))
        }
    }
}

fn add_custom_exercise<R: BufRead, W: Write>(
    user_id: &str,
    other_exercises: &OtherExerciseRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let name = prompter.line("Enter the name of the exercise: ")?;
    let light = prompter.number("Enter calories burned per minute for light intensity: ")?;
    let moderate = prompter.number("Enter calories burned per minute for moderate intensity: ")?;
    let intense = prompter.number("Enter calories burned per minute for intense intensity: ")?;

    other_exercises.create_custom(user_id, &name, light, moderate, intense)?;
    prompter.say(&format!("--- Custom exercise '{name}' added successfully. ---"))
}
