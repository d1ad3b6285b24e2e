#![allow(dead_code)]

use std::io::Cursor;

use fitjournal::chart::{JsonRenderer, TextRenderer};
use fitjournal::db::{create_memory_pool, DbPool};
use fitjournal::menu::{self, App};
use fitjournal::migrations::run_migrations_for_tests;
use fitjournal::models::{CreateUser, FitnessGoal, Gender, User};
use fitjournal::prompt::Prompter;
use fitjournal::repositories::UserRepository;

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn test_app() -> (App, DbPool) {
    let pool = setup_test_db();
    (App::new(pool.clone()), pool)
}

pub fn create_test_user(pool: &DbPool, username: &str) -> User {
    UserRepository::new(pool.clone())
        .create(CreateUser {
            username: username.to_string(),
            password: "password123".to_string(),
            age: 30.0,
            gender: Gender::Female,
            weight_kg: 60.0,
            height_cm: 165.0,
            fitness_goal: FitnessGoal::Lose,
        })
        .expect("Failed to create test user")
}

/// Drive the menu loop with scripted input; returns the prompt transcript.
pub fn run_menu(app: &App, script: &str) -> String {
    let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut renderer = TextRenderer::new(Vec::new());
    menu::run(app, &mut prompter, &mut renderer).expect("menu loop failed");
    String::from_utf8(prompter.into_output()).unwrap()
}

/// Drive the menu loop capturing chart output as JSON. The script must
/// trigger at most one chart view so the buffer stays a single document.
pub fn run_menu_with_chart(app: &App, script: &str) -> (String, String) {
    let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut rendered = Vec::new();
    let mut renderer = JsonRenderer::new(&mut rendered);
    menu::run(app, &mut prompter, &mut renderer).expect("menu loop failed");
    (
        String::from_utf8(prompter.into_output()).unwrap(),
        String::from_utf8(rendered).unwrap(),
    )
}

/// Script fragment that registers "alice" and lands on the logged-in menu.
pub const REGISTER_ALICE: &str = "2\nalice\nsecret\n30\nfemale\n60\n165\nlose\n\n";
