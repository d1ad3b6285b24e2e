use std::io::{BufRead, Write};

use crate::error::Result;
use crate::models::CreateExerciseEntry;
use crate::prompt::Prompter;
use crate::repositories::ExerciseRepository;

/// Log the best set of an exercise session.
pub fn log_exercise<R: BufRead, W: Write>(
    user_id: &str,
    exercises: &ExerciseRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--- Log Exercise ---")?;
    let name = prompter.line("Enter Exercise Name: ")?;
    prompter.say(&format!(
        "--- Enter the best set for {name}. Enter 0 for the unrelated attributes ---"
    ))?;

    let reps = prompter.number("Reps: ")? as i64;
    let weight_kg = prompter.number("Weight (kg): ")?;
    let duration_min = prompter.number("Duration (minutes): ")?;
    let distance_km = prompter.number("Distance (km): ")?;

    exercises.create(
        user_id,
        CreateExerciseEntry {
            name,
            reps,
            weight_kg,
            duration_min,
            distance_km,
        },
    )?;

    prompter.pause("--- Exercise logged successfully! Press enter to return to menu ---")
}
