//! Progress aggregation: goal rows joined against logged exercise history,
//! and the daily net-calorie series. Stateless; computed on demand.

use serde::{Deserialize, Serialize};

use crate::chart::{Chart, ChartPoint, ChartSeries, ReferenceLine};
use crate::error::Result;
use crate::metrics;
use crate::models::{DailyCalorieTotals, GoalAttribute};
use crate::repositories::{ExerciseRepository, GoalRepository};

/// Progress toward one category of one exercise goal, as a percentage of
/// the target capped at 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub exercise_name: String,
    pub category: GoalAttribute,
    pub percentage: f64,
}

/// Percentage of target achieved, clamped to [0, 100]. A zero or negative
/// target yields 0 rather than a division error.
pub fn progress_percentage(actual: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (actual / target * 100.0).clamp(0.0, 100.0)
}

/// Join each of the user's exercise goals against the most recent matching
/// log entry. Goals are visited in store order; within a goal, categories
/// follow the fixed {Reps, Weight, Duration, Distance} order, and only
/// categories with a non-null, non-zero target are emitted.
pub fn exercise_progress(
    goals: &GoalRepository,
    exercises: &ExerciseRepository,
    user_id: &str,
) -> Result<Vec<ProgressEntry>> {
    let mut entries = Vec::new();

    for goal in goals.find_with_targets(user_id)? {
        let Some(exercise_name) = goal.exercise_name.clone() else {
            continue;
        };
        let latest = exercises.find_latest_by_name(user_id, &exercise_name)?;

        for category in GoalAttribute::ALL {
            let Some(target) = goal.target(category) else {
                continue;
            };
            if target == 0.0 {
                continue;
            }

            let percentage = match &latest {
                Some(entry) => progress_percentage(entry.value(category), target),
                None => 0.0,
            };

            entries.push(ProgressEntry {
                exercise_name: exercise_name.clone(),
                category,
                percentage,
            });
        }
    }

    Ok(entries)
}

/// Shape progress entries into a chart: one series per category, exercises
/// on the x axis.
pub fn exercise_progress_chart(entries: &[ProgressEntry]) -> Chart {
    let series = GoalAttribute::ALL
        .iter()
        .map(|category| ChartSeries {
            label: category.label().to_string(),
            points: entries
                .iter()
                .filter(|e| e.category == *category)
                .map(|e| ChartPoint {
                    x: e.exercise_name.clone(),
                    y: e.percentage,
                })
                .collect(),
        })
        .filter(|s| !s.points.is_empty())
        .collect();

    Chart {
        title: "Exercise Progress".to_string(),
        x_label: "Exercises".to_string(),
        y_label: "Progress (%)".to_string(),
        series,
        reference_line: None,
    }
}

/// Daily net calories over time with the calorie goal as a reference line.
pub fn caloric_progress_chart(
    totals: &[DailyCalorieTotals],
    daily_calorie_goal: Option<f64>,
) -> Chart {
    let points = totals
        .iter()
        .map(|day| ChartPoint {
            x: day.date.to_string(),
            y: metrics::net_daily_calories(day.consumed, day.burned),
        })
        .collect();

    Chart {
        title: "Caloric Progress Tracker".to_string(),
        x_label: "Date".to_string(),
        y_label: "Calories".to_string(),
        series: vec![ChartSeries {
            label: "Daily Calories Total".to_string(),
            points,
        }],
        reference_line: daily_calorie_goal.map(|value| ReferenceLine {
            label: "Daily Calorie Goal".to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_progress_percentage_basic() {
        assert_eq!(progress_percentage(5.0, 10.0), 50.0);
        assert_eq!(progress_percentage(10.0, 10.0), 100.0);
    }

    #[test]
    fn test_progress_percentage_caps_at_100() {
        assert_eq!(progress_percentage(25.0, 10.0), 100.0);
    }

    #[test]
    fn test_progress_percentage_never_negative() {
        assert_eq!(progress_percentage(-5.0, 10.0), 0.0);
    }

    #[test]
    fn test_progress_percentage_zero_target() {
        assert_eq!(progress_percentage(42.0, 0.0), 0.0);
        assert_eq!(progress_percentage(42.0, -1.0), 0.0);
    }

    #[test]
    fn test_progress_percentage_in_range() {
        for (actual, target) in [(0.0, 1.0), (3.5, 7.0), (100.0, 3.0), (-2.0, 5.0)] {
            let p = progress_percentage(actual, target);
            assert!((0.0..=100.0).contains(&p), "{p} out of range");
        }
    }

    #[test]
    fn test_caloric_chart_points_and_reference() {
        let totals = vec![
            DailyCalorieTotals {
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                consumed: 2200.0,
                burned: 500.0,
            },
            DailyCalorieTotals {
                date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                consumed: 1800.0,
                burned: 0.0,
            },
        ];

        let chart = caloric_progress_chart(&totals, Some(1900.0));

        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].points[0].x, "2024-05-01");
        assert_eq!(chart.series[0].points[0].y, 1700.0);
        assert_eq!(chart.series[0].points[1].y, 1800.0);
        assert_eq!(chart.reference_line.as_ref().unwrap().value, 1900.0);
    }

    #[test]
    fn test_caloric_chart_without_goal() {
        let chart = caloric_progress_chart(&[], None);
        assert!(chart.reference_line.is_none());
        assert!(chart.series[0].points.is_empty());
    }

    #[test]
    fn test_exercise_progress_chart_groups_by_category() {
        let entries = vec![
            ProgressEntry {
                exercise_name: "Squat".into(),
                category: GoalAttribute::Reps,
                percentage: 80.0,
            },
            ProgressEntry {
                exercise_name: "Squat".into(),
                category: GoalAttribute::Weight,
                percentage: 50.0,
            },
            ProgressEntry {
                exercise_name: "Run".into(),
                category: GoalAttribute::Distance,
                percentage: 100.0,
            },
        ];

        let chart = exercise_progress_chart(&entries);

        // Duration has no entries, so three series remain
        assert_eq!(chart.series.len(), 3);
        let reps = &chart.series[0];
        assert_eq!(reps.label, "Reps");
        assert_eq!(reps.points[0].x, "Squat");
        assert_eq!(reps.points[0].y, 80.0);
    }
}
