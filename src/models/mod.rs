// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod admin;
pub mod report;
pub mod user;
pub mod workout_plan;

pub use admin::Admin;
pub use report::ReportItem;
pub use user::{
    CalorieIntakeEntry, DatedEntry, Goal, HeightEntry, SleepEntry, StepsEntry, User, WaterEntry,
    WeightEntry, WorkoutEntry,
};
pub use workout_plan::{Exercise, WorkoutPlan};
