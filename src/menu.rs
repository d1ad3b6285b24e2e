//! The top-level menu loop: prompt, dispatch, repeat.
//!
//! Recoverable errors (bad selections, duplicate names, aborted entries)
//! are reported and the loop continues; store and I/O failures end the
//! program.

use std::io::{BufRead, Write};

use crate::chart::ChartRenderer;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::handlers::{auth, charts, exercises, food, profile, routines, workouts};
use crate::prompt::Prompter;
use crate::repositories::{
    CalorieRepository, ExerciseRepository, GoalRepository, OtherExerciseRepository,
    RoutineRepository, UserRepository,
};
use crate::session::Session;

/// All repositories over one shared pool.
pub struct App {
    pub users: UserRepository,
    pub exercises: ExerciseRepository,
    pub routines: RoutineRepository,
    pub calories: CalorieRepository,
    pub goals: GoalRepository,
    pub other_exercises: OtherExerciseRepository,
}

impl App {
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            exercises: ExerciseRepository::new(pool.clone()),
            routines: RoutineRepository::new(pool.clone()),
            calories: CalorieRepository::new(pool.clone()),
            goals: GoalRepository::new(pool.clone()),
            other_exercises: OtherExerciseRepository::new(pool),
        }
    }
}

enum Outcome {
    Continue,
    Exit,
}

pub fn run<R: BufRead, W: Write>(
    app: &App,
    prompter: &mut Prompter<R, W>,
    renderer: &mut impl ChartRenderer,
) -> Result<()> {
    let mut session = Session::default();

    loop {
        let outcome = if let Some(user_id) = session.user_id().map(str::to_string) {
            authenticated_menu(app, &mut session, &user_id, prompter, renderer)
        } else {
            main_menu(app, &mut session, prompter)
        };

        match outcome {
            Ok(Outcome::Exit) => {
                prompter.say("Goodbye!")?;
                return Ok(());
            }
            Ok(Outcome::Continue) => {}
            Err(e) if e.is_recoverable() => {
                tracing::debug!("recovered: {e}");
                prompter.say(&format!("{e}"))?;
            }
            Err(e) => {
                tracing::error!("fatal: {e}");
                return Err(e);
            }
        }
    }
}

fn main_menu<R: BufRead, W: Write>(
    app: &App,
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome> {
    prompter.say("\nFitness Journal - Main Menu:")?;
    prompter.say("1. Log In")?;
    prompter.say("2. Register")?;
    prompter.say("3. Exit")?;

    // A closed input stream means there is nothing more to do
    let option = match prompter.line("Select an option: ") {
        Err(AppError::Aborted) => return Ok(Outcome::Exit),
        other => other?,
    };

    match option.as_str() {
        "1" => {
            auth::login(session, &app.users, prompter)?;
            Ok(Outcome::Continue)
        }
        "2" => {
            auth::register(session, &app.users, prompter)?;
            Ok(Outcome::Continue)
        }
        "3" => Ok(Outcome::Exit),
        _ => {
            prompter.say("Invalid option. Please try again.")?;
            Ok(Outcome::Continue)
        }
    }
}

fn authenticated_menu<R: BufRead, W: Write>(
    app: &App,
    session: &mut Session,
    user_id: &str,
    prompter: &mut Prompter<R, W>,
    renderer: &mut impl ChartRenderer,
) -> Result<Outcome> {
    prompter.say("\nFitness Journal - Logged In:")?;
    prompter.say("1. Log Exercise")?;
    prompter.say("2. Log Workout")?;
    prompter.say("3. Log Food")?;
    prompter.say("4. Create Exercise Routine")?;
    prompter.say("5. View Exercise Routines")?;
    prompter.say("6. View Caloric Progress")?;
    prompter.say("7. View Exercise Progress")?;
    prompter.say("8. Update Profile")?;
    prompter.say("9. Log Out")?;

    let option = match prompter.line("Select an option: ") {
        Err(AppError::Aborted) => return Ok(Outcome::Exit),
        other => other?,
    };

    match option.as_str() {
        "1" => exercises::log_exercise(user_id, &app.exercises, prompter)?,
        "2" => workouts::log_workout(user_id, &app.calories, &app.other_exercises, prompter)?,
        "3" => food::log_food(user_id, &app.calories, &app.goals, prompter)?,
        "4" => routines::create_routine(user_id, &app.routines, prompter)?,
        "5" => routines::view_routines(user_id, &app.routines, prompter)?,
        "6" => charts::view_caloric_progress(user_id, &app.calories, &app.goals, prompter, renderer)?,
        "7" => charts::view_exercise_progress(user_id, &app.goals, &app.exercises, prompter, renderer)?,
        "8" => profile::update_profile(user_id, &app.users, &app.goals, prompter)?,
        "9" => {
            prompter.say("Logging out.")?;
            session.log_out();
        }
        _ => prompter.say("Invalid option. Please try again.")?,
    }

    Ok(Outcome::Continue)
}
