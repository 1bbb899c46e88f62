// SPDX-License-Identifier: MIT

//! Goal calculator: pure functions mapping a user's stated objective to
//! target thresholds per metric.
//!
//! Two families of thresholds exist side by side and deliberately disagree:
//! the daily goals served by the per-metric `getusergoal…` endpoints, and
//! the report goals paired with the report's 10-day windowed sums. Sleep and
//! water goals are fixed constants rather than goal-dependent, unlike steps
//! and workouts; this asymmetry is carried from the product spec as-is.

use crate::models::Goal;
use chrono::{Datelike, NaiveDate};

/// Report-level sleep target (hours over the report window).
pub const REPORT_SLEEP_GOAL_HRS: f64 = 60.0;
/// Report-level water target (milliliters over the report window).
pub const REPORT_WATER_GOAL_ML: f64 = 40000.0;
/// Daily sleep target served by `/sleeptrack/getusersleep`.
pub const DAILY_SLEEP_GOAL_HRS: f64 = 8.0;
/// Daily water target served by `/watertrack/getusergoalwater`.
pub const DAILY_WATER_GOAL_ML: f64 = 4000.0;
/// Target BMI used to derive the goal weight.
pub const TARGET_BMI: f64 = 22.0;

/// Calorie adjustment applied to the BMR for weight loss/gain.
const CALORIE_ADJUSTMENT: f64 = 500.0;
/// The report calorie target is the adjusted BMR scaled to the 10-day
/// report window.
const REPORT_WINDOW_MULTIPLIER: f64 = 10.0;

/// Age in whole calendar years, computed from the year difference only.
/// Month and day are ignored; a birthday later in the year still counts.
pub fn age_in_years(dob: NaiveDate, today: NaiveDate) -> f64 {
    f64::from(today.year() - dob.year())
}

/// Basal metabolic rate (Harris-Benedict), branched on gender.
/// Any gender other than "male" takes the female formula.
pub fn bmr(gender: &str, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    if gender == "male" {
        88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years
    } else {
        447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years
    }
}

/// Daily calorie target: BMR shifted by the goal adjustment.
pub fn daily_calorie_goal(goal: Goal, bmr: f64) -> f64 {
    match goal {
        Goal::WeightLoss => bmr - CALORIE_ADJUSTMENT,
        Goal::WeightGain => bmr + CALORIE_ADJUSTMENT,
        Goal::Maintain => bmr,
    }
}

/// Report calorie target: the daily target scaled to the 10-day window.
pub fn report_calorie_goal(goal: Goal, bmr: f64) -> f64 {
    daily_calorie_goal(goal, bmr) * REPORT_WINDOW_MULTIPLIER
}

/// Goal weight in kilograms from the target BMI and current height.
pub fn goal_weight_kg(height_cm: f64) -> f64 {
    TARGET_BMI * (height_cm / 100.0).powi(2)
}

/// Report step target by goal.
pub fn report_steps_goal(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 10000.0,
        Goal::WeightGain => 50000.0,
        Goal::Maintain => 75000.0,
    }
}

/// Daily step target served by `/steptrack/getusergoalsteps`.
pub fn daily_steps_goal(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 10000.0,
        Goal::WeightGain => 5000.0,
        Goal::Maintain => 7500.0,
    }
}

/// Workout days per week by goal.
pub fn workout_days_goal(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => 7.0,
        Goal::WeightGain => 4.0,
        Goal::Maintain => 5.0,
    }
}
