mod common;

use common::{run_menu, run_menu_with_chart, test_app, REGISTER_ALICE};
use fitjournal::chart::Chart;
use fitjournal::models::GoalAttribute;
use fitjournal::repositories::GoalRepository;

#[test]
fn test_setting_two_attributes_keeps_both() {
    let (app, pool) = test_app();

    // Add a reps goal, then a weight goal, for the same exercise
    let script = format!(
        "{REGISTER_ALICE}8\n2\nSquat\nreps\n10\n\n8\n2\nSquat\nweight\n50\n\n9\n3\n"
    );
    run_menu(&app, &script);

    let user = app.users.find_by_username("alice").unwrap().unwrap();
    let goals = GoalRepository::new(pool.clone());
    let goal = goals.find_by_exercise(&user.id, "Squat").unwrap().unwrap();

    assert_eq!(goal.target_reps, Some(10.0));
    assert_eq!(goal.target_weight, Some(50.0));

    let conn = pool.get().unwrap();
    let rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM goals WHERE exercise_name = 'Squat'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_exercise_progress_chart_percentages() {
    let (app, _pool) = test_app();

    // Goal: 10 reps / 50 kg on Squat. Logged best set: 5 reps at 25 kg.
    let script = format!(
        "{REGISTER_ALICE}\
         8\n2\nSquat\nreps\n10\n\n\
         8\n2\nSquat\nweight\n50\n\n\
         1\nSquat\n5\n25\n0\n0\n\n\
         7\n\n9\n3\n"
    );
    let (_transcript, rendered) = run_menu_with_chart(&app, &script);

    let chart: Chart = serde_json::from_str(&rendered).unwrap();
    assert_eq!(chart.title, "Exercise Progress");

    let reps = chart.series.iter().find(|s| s.label == "Reps").unwrap();
    assert_eq!(reps.points[0].x, "Squat");
    assert_eq!(reps.points[0].y, 50.0);

    let weight = chart.series.iter().find(|s| s.label == "Weight").unwrap();
    assert_eq!(weight.points[0].y, 50.0);

    // No duration or distance targets were set
    assert!(chart.series.iter().all(|s| s.label != "Duration"));
    assert!(chart.series.iter().all(|s| s.label != "Distance"));
}

#[test]
fn test_progress_capped_at_100_percent() {
    let (app, _pool) = test_app();

    // Target 10 reps, logged 25
    let script = format!(
        "{REGISTER_ALICE}\
         8\n2\nSquat\nreps\n10\n\n\
         1\nSquat\n25\n0\n0\n0\n\n\
         7\n\n9\n3\n"
    );
    let (_transcript, rendered) = run_menu_with_chart(&app, &script);

    let chart: Chart = serde_json::from_str(&rendered).unwrap();
    let reps = chart.series.iter().find(|s| s.label == "Reps").unwrap();
    assert_eq!(reps.points[0].y, 100.0);
}

#[test]
fn test_goal_without_logged_entry_shows_zero() {
    let (app, _pool) = test_app();

    let script = format!("{REGISTER_ALICE}8\n2\nDeadlift\nweight\n120\n\n7\n\n9\n3\n");
    let (_transcript, rendered) = run_menu_with_chart(&app, &script);

    let chart: Chart = serde_json::from_str(&rendered).unwrap();
    let weight = chart.series.iter().find(|s| s.label == "Weight").unwrap();
    assert_eq!(weight.points[0].x, "Deadlift");
    assert_eq!(weight.points[0].y, 0.0);
}

#[test]
fn test_no_goals_message_instead_of_chart() {
    let (app, _pool) = test_app();

    let script = format!("{REGISTER_ALICE}7\n9\n3\n");
    let (transcript, rendered) = run_menu_with_chart(&app, &script);

    assert!(transcript.contains("No exercise goals found"));
    assert!(rendered.is_empty());
}

#[test]
fn test_zero_target_category_not_charted() {
    let (app, pool) = test_app();

    let script = format!("{REGISTER_ALICE}9\n3\n");
    run_menu(&app, &script);

    let user = app.users.find_by_username("alice").unwrap().unwrap();
    let goals = GoalRepository::new(pool);
    goals
        .set_target(&user.id, "Plank", GoalAttribute::Duration, 0.0)
        .unwrap();

    let entries =
        fitjournal::progress::exercise_progress(&goals, &app.exercises, &user.id).unwrap();
    assert!(entries.is_empty());
}
