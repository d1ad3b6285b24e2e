use std::io::{BufRead, Write};

use crate::error::{AppError, Result};
use crate::models::CreateRoutineStep;
use crate::prompt::Prompter;
use crate::repositories::RoutineRepository;

/// Build a routine interactively and persist it in one transaction.
/// Typing 'cancel' (or closing the input) at an exercise prompt aborts the
/// whole entry; nothing is written in that case.
pub fn create_routine<R: BufRead, W: Write>(
    user_id: &str,
    routines: &RoutineRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--- Create Exercise Routine ---")?;
    let routine_name = prompter.line("Enter Routine Name: ")?;

    if routines.name_exists(user_id, &routine_name)? {
        return Err(AppError::DuplicateRoutine(routine_name));
    }

    let mut steps = Vec::new();

    loop {
        let exercise_name =
            prompter.line("Enter Exercise Name ('end' to finish, 'cancel' to abort): ")?;
        if exercise_name.eq_ignore_ascii_case("end") {
            break;
        }
        if exercise_name.eq_ignore_ascii_case("cancel") {
            return Err(AppError::Aborted);
        }

        prompter.say("--- For each entry add a number, else add 0 if not applicable ---")?;
        let sets = prompter.number("Number of Sets: ")? as i64;

        if sets > 0 {
            for set_number in 1..=sets {
                steps.push(CreateRoutineStep {
                    exercise_name: exercise_name.clone(),
                    set_number,
                    reps: prompter.number(&format!("Set {set_number} Reps: "))? as i64,
                    weight_kg: prompter.number(&format!("Set {set_number} Weight (kg): "))?,
                    duration_min: prompter.number(&format!("Set {set_number} Duration (minutes): "))?,
                    distance_km: prompter.number(&format!("Set {set_number} Distance (km): "))?,
                });
            }
        } else {
            steps.push(CreateRoutineStep {
                exercise_name,
                set_number: 1,
                reps: prompter.number("Number of Reps: ")? as i64,
                weight_kg: prompter.number("Weight (kg): ")?,
                duration_min: prompter.number("Duration (minutes): ")?,
                distance_km: prompter.number("Distance (km): ")?,
            });
        }
    }

    if steps.is_empty() {
        prompter.say("No exercises entered; nothing to save.")?;
        return Ok(());
    }

    routines.create(user_id, &routine_name, &steps)?;
    prompter.pause("--- Routine created successfully. Press enter to return to menu ---")
}

/// List routines, let the user pick one by number or name, and print its
/// sets grouped by exercise.
pub fn view_routines<R: BufRead, W: Write>(
    user_id: &str,
    routines: &RoutineRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    prompter.say("--- View Exercise Routines ---")?;
    let names = routines.routine_names(user_id)?;

    if names.is_empty() {
        prompter.say("No routines available.")?;
        return Ok(());
    }

    prompter.say("Select a routine:")?;
    for (index, name) in names.iter().enumerate() {
        prompter.say(&format!("{}. {name}", index + 1))?;
    }

    let selection = prompter.line("Enter the routine number or name: ")?;
    let routine_name = selection
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| names.get(i).cloned())
        .unwrap_or(selection);

    let steps = routines.steps_for(user_id, &routine_name)?;
    if steps.is_empty() {
        prompter.pause("-- No exercises found for the selected routine. Press enter to return to menu ---")?;
        return Ok(());
    }

    prompter.say(&format!("Exercise routine: {routine_name}"))?;
    let mut current_exercise = None::<String>;
    for step in &steps {
        if current_exercise.as_deref() != Some(step.exercise_name.as_str()) {
            prompter.say(&format!("\n{}", step.exercise_name))?;
            current_exercise = Some(step.exercise_name.clone());
        }

        let info = step.describe();
        if !info.is_empty() {
            prompter.say(&format!("Set {}: {info}", step.set_number))?;
        }
    }

    prompter.pause("--- Press enter to continue to menu ---")
}
