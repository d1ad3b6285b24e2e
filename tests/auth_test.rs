mod common;

use common::{run_menu, test_app, REGISTER_ALICE};

#[test]
fn test_register_then_login_round_trip() {
    let (app, _pool) = test_app();

    // Register, log out, log back in with the same credentials, exit
    let script = format!("{REGISTER_ALICE}9\n1\nalice\nsecret\n9\n3\n");
    let transcript = run_menu(&app, &script);

    assert!(transcript.contains("Registration successful"));
    assert!(transcript.contains("--- Login successful! ---"));
    assert!(transcript.contains("Goodbye!"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let (app, _pool) = test_app();

    let script = format!("{REGISTER_ALICE}9\n1\nalice\nwrong\n3\n");
    let transcript = run_menu(&app, &script);

    assert!(transcript.contains("Login failed"));
}

#[test]
fn test_login_unknown_user_fails() {
    let (app, _pool) = test_app();

    let transcript = run_menu(&app, "1\nnobody\npw\n3\n");
    assert!(transcript.contains("Login failed"));
}

#[test]
fn test_duplicate_username_leaves_one_user_row() {
    let (app, pool) = test_app();

    let script = format!("{REGISTER_ALICE}9\n2\nalice\n3\n");
    let transcript = run_menu(&app, &script);

    assert!(transcript.contains("Username already taken: alice"));

    let conn = pool.get().unwrap();
    let users: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM users WHERE username = 'alice'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(users, 1);

    // Exactly the one daily-calorie goal row from the successful run
    let goal_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM goals", [], |row| row.get(0))
        .unwrap();
    assert_eq!(goal_rows, 1);
}

#[test]
fn test_registration_stores_derived_bmr() {
    let (app, _pool) = test_app();

    let script = format!("{REGISTER_ALICE}9\n3\n");
    run_menu(&app, &script);

    let user = app.users.find_by_username("alice").unwrap().unwrap();
    let expected = 655.1 + 9.563 * 60.0 + 1.850 * 165.0 - 4.676 * 30.0;
    assert_eq!(user.bmr, expected);
}
