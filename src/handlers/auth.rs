use std::io::{BufRead, Write};

use crate::error::{AppError, Result};
use crate::models::{CreateUser, FitnessGoal, Gender};
use crate::prompt::Prompter;
use crate::repositories::UserRepository;
use crate::session::Session;

pub fn login<R: BufRead, W: Write>(
    session: &mut Session,
    users: &UserRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let username = prompter.line("Enter your username: ")?;
    let password = prompter.line("Enter your password: ")?;

    match users.find_by_credentials(&username, &password)? {
        Some(user) => {
            session.log_in(user.id);
            tracing::info!(username = %username, "user logged in");
            prompter.say("--- Login successful! ---")
        }
        None => prompter.say("--- Login failed. Please check your username and password ---"),
    }
}

pub fn register<R: BufRead, W: Write>(
    session: &mut Session,
    users: &UserRepository,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    let username = prompter.line("Enter a username: ")?;
    if users.find_by_username(&username)?.is_some() {
        return Err(AppError::DuplicateUsername(username));
    }

    let password = prompter.line("Enter a password: ")?;
    let age = prompter.number("Enter your current age (years): ")?;
    let gender = Gender::parse(&prompter.choice("Enter your gender (male/female): ", &["male", "female"])?)?;
    let weight_kg = prompter.number("Enter your weight (kg): ")?;
    let height_cm = prompter.number("What is your height (cm): ")?;
    let fitness_goal = FitnessGoal::parse(&prompter.choice(
        "Is your fitness goal to lose/gain/maintain?: ",
        &["lose", "gain", "maintain"],
    )?);

    let user = users.create(CreateUser {
        username,
        password,
        age,
        gender,
        weight_kg,
        height_cm,
        fitness_goal,
    })?;

    tracing::info!(username = %user.username, "user registered");
    session.log_in(user.id);
    prompter.pause("--- Registration successful. Welcome! Press enter to continue to the menu ---")
}
