// SPDX-License-Identifier: MIT

//! Daily report aggregator.
//!
//! Composes the 10-day windowed sums over the tracked entry logs with the
//! BMR/BMI-derived targets from [`goals`](crate::services::goals) into the
//! fixed seven-item summary the frontend renders.

use crate::error::{AppError, Result};
use crate::models::{ReportItem, User};
use crate::services::goals;
use crate::time_utils::{start_of_today, within_last_days};
use chrono::{DateTime, Utc};

/// The report window in days: entries dated within `[today - 10d, today]`
/// (today truncated to midnight) count toward the sums.
pub const REPORT_WINDOW_DAYS: i64 = 10;

/// Build the seven metric summaries for a user at instant `now`.
///
/// Weight and height are the last entries in storage order, not windowed.
/// A user with an empty weight or height log (possible only through manual
/// record edits; registration always seeds one of each) is a client error,
/// not a crash.
pub fn build_report(user: &User, now: DateTime<Utc>) -> Result<Vec<ReportItem>> {
    let today = start_of_today(now);
    let in_window = |date: DateTime<Utc>| within_last_days(date, today, REPORT_WINDOW_DAYS);

    let calorie_intake: f64 = user
        .calorie_intake
        .iter()
        .filter(|e| in_window(e.date))
        .map(|e| e.calorie_intake)
        .sum();

    let sleep: f64 = user
        .sleep
        .iter()
        .filter(|e| in_window(e.date))
        .map(|e| e.duration_in_hrs)
        .sum();

    let steps: f64 = user
        .steps
        .iter()
        .filter(|e| in_window(e.date))
        .map(|e| e.steps)
        .sum();

    let water: f64 = user
        .water
        .iter()
        .filter(|e| in_window(e.date))
        .map(|e| e.amount_in_milliliters)
        .sum();

    // Workouts count sessions, not durations
    let workouts = user.workouts.iter().filter(|e| in_window(e.date)).count() as f64;

    let weight_kg = user
        .current_weight()
        .ok_or_else(|| AppError::Validation("No weight entries recorded yet".to_string()))?;
    let height_cm = user
        .current_height()
        .ok_or_else(|| AppError::Validation("No height entries recorded yet".to_string()))?;

    let age = goals::age_in_years(user.dob, now.date_naive());
    let bmr = goals::bmr(&user.gender, weight_kg, height_cm, age);
    let max_calorie_intake = goals::report_calorie_goal(user.goal, bmr);
    let goal_weight = goals::goal_weight_kg(height_cm);

    Ok(vec![
        ReportItem {
            name: "Calorie Intake",
            value: calorie_intake,
            goal: Some(max_calorie_intake),
            unit: "cal",
        },
        ReportItem {
            name: "Sleep",
            value: sleep,
            goal: Some(goals::REPORT_SLEEP_GOAL_HRS),
            unit: "hrs",
        },
        ReportItem {
            name: "Steps",
            value: steps,
            goal: Some(goals::report_steps_goal(user.goal)),
            unit: "steps",
        },
        ReportItem {
            name: "Water",
            value: water,
            goal: Some(goals::REPORT_WATER_GOAL_ML),
            unit: "ml",
        },
        ReportItem {
            name: "Workout",
            value: workouts,
            goal: Some(goals::workout_days_goal(user.goal)),
            unit: "days",
        },
        ReportItem {
            name: "Weight",
            value: weight_kg,
            goal: Some(goal_weight),
            unit: "kg",
        },
        ReportItem {
            name: "Height",
            value: height_cm,
            goal: None,
            unit: "cm",
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CalorieIntakeEntry, Goal, HeightEntry, SleepEntry, StepsEntry, User, WaterEntry,
        WeightEntry, WorkoutEntry,
    };
    use chrono::{Duration, NaiveDate, TimeZone};

    fn test_user() -> User {
        User {
            id: "user-1".to_string(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            gender: "male".to_string(),
            dob: NaiveDate::from_ymd_opt(1994, 6, 15).unwrap(),
            goal: Goal::Maintain,
            activity_level: "moderate".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            weight: vec![],
            height: vec![],
            sleep: vec![],
            steps: vec![],
            water: vec![],
            workouts: vec![],
            calorie_intake: vec![],
        }
    }

    fn approx_eq(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "expected {} ≈ {}", a, b);
    }

    // now = 2024-06-01T12:00:00Z → age = 2024 - 1994 = 30
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn seeded_user() -> User {
        let mut user = test_user();
        let seed = now() - Duration::days(30);
        user.weight.push(WeightEntry {
            weight: 70.0,
            date: seed,
        });
        user.height.push(HeightEntry {
            height: 175.0,
            date: seed,
        });
        user
    }

    #[test]
    fn test_report_reference_numbers() {
        // Male, 70 kg, 175 cm, age 30, maintain — the known-good values:
        // BMR = 1695.667, calorie goal = 16956.67, goal weight = 67.375.
        let user = seeded_user();
        let report = build_report(&user, now()).unwrap();

        assert_eq!(report.len(), 7);
        let names: Vec<&str> = report.iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec![
                "Calorie Intake",
                "Sleep",
                "Steps",
                "Water",
                "Workout",
                "Weight",
                "Height"
            ]
        );

        approx_eq(report[0].goal.unwrap(), 16956.67);
        approx_eq(report[1].goal.unwrap(), 60.0);
        approx_eq(report[2].goal.unwrap(), 75000.0);
        approx_eq(report[3].goal.unwrap(), 40000.0);
        approx_eq(report[4].goal.unwrap(), 5.0);
        approx_eq(report[5].goal.unwrap(), 67.375);
        assert!(report[6].goal.is_none());

        approx_eq(report[5].value, 70.0);
        approx_eq(report[6].value, 175.0);
    }

    #[test]
    fn test_windowed_sums_exclude_out_of_window_entries() {
        let mut user = seeded_user();
        let today_midnight = start_of_today(now());

        // Inside the window
        user.sleep.push(SleepEntry {
            date: today_midnight - Duration::days(3),
            duration_in_hrs: 7.0,
        });
        user.sleep.push(SleepEntry {
            date: today_midnight - Duration::days(10),
            duration_in_hrs: 8.0,
        });
        // Outside: 11 days ago, and later today than the midnight bound
        user.sleep.push(SleepEntry {
            date: today_midnight - Duration::days(11),
            duration_in_hrs: 5.0,
        });
        user.sleep.push(SleepEntry {
            date: today_midnight + Duration::hours(6),
            duration_in_hrs: 2.0,
        });

        user.steps.push(StepsEntry {
            date: today_midnight - Duration::days(1),
            steps: 4000.0,
        });
        user.water.push(WaterEntry {
            date: today_midnight - Duration::days(2),
            amount_in_milliliters: 1500.0,
        });
        user.calorie_intake.push(CalorieIntakeEntry {
            item: "rice".to_string(),
            date: today_midnight - Duration::days(2),
            quantity: 100.0,
            quantitytype: "grams".to_string(),
            calorie_intake: 350.0,
        });
        user.workouts.push(WorkoutEntry {
            date: today_midnight - Duration::days(4),
            exercise: "pushups".to_string(),
            duration_in_minutes: 20.0,
        });
        user.workouts.push(WorkoutEntry {
            date: today_midnight - Duration::days(20),
            exercise: "situps".to_string(),
            duration_in_minutes: 15.0,
        });

        let report = build_report(&user, now()).unwrap();

        approx_eq(report[0].value, 350.0); // calories
        approx_eq(report[1].value, 15.0); // sleep: 7 + 8
        approx_eq(report[2].value, 4000.0); // steps
        approx_eq(report[3].value, 1500.0); // water
        approx_eq(report[4].value, 1.0); // workouts: session count
    }

    #[test]
    fn test_weight_is_last_in_storage_order_not_most_recent() {
        let mut user = seeded_user();
        // Appended later but dated earlier: still the "current" reading
        user.weight.push(WeightEntry {
            weight: 82.0,
            date: now() - Duration::days(300),
        });

        let report = build_report(&user, now()).unwrap();
        approx_eq(report[5].value, 82.0);
    }

    #[test]
    fn test_missing_weight_entries_is_client_error() {
        let mut user = seeded_user();
        user.weight.clear();

        let err = build_report(&user, now()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
