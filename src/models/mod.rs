pub mod calorie;
pub mod exercise;
pub mod from_row;
pub mod goal;
pub mod other_exercise;
pub mod routine;
pub mod user;

pub use calorie::{CalorieEntry, DailyCalorieTotals};
pub use exercise::{CreateExerciseEntry, ExerciseEntry};
pub use from_row::FromSqliteRow;
pub use goal::{Goal, GoalAttribute};
pub use other_exercise::{OtherExercise, DEFAULT_CATALOG};
pub use routine::{CreateRoutineStep, RoutineStep};
pub use user::{CreateUser, FitnessGoal, Gender, User};
