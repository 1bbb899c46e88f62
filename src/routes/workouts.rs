// SPDX-License-Identifier: MIT

//! Workout session tracking routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::WorkoutEntry;
use crate::routes::{load_user, ApiResponse, JsonBody};
use crate::services::goals;
use crate::services::tracker::{self, Limit};
use crate::time_utils::start_of_today;
use crate::AppState;
use axum::{
    extract::State,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/addworkoutentry", post(add_entry))
        .route("/getworkoutsbydate", post(get_by_date))
        .route("/getworkoutsbylimit", post(get_by_limit))
        .route("/deleteworkoutentry", delete(delete_entry))
        .route("/getusergoalworkout", get(get_goal))
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    date: Option<DateTime<Utc>>,
    exercise: Option<String>,
    #[serde(rename = "durationInMinutes")]
    duration_in_minutes: Option<f64>,
}

async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<AddEntryRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let (Some(date), Some(exercise), Some(duration_in_minutes)) =
        (payload.date, payload.exercise, payload.duration_in_minutes)
    else {
        return Err(AppError::Validation(
            "Please provide date, exercise and duration".to_string(),
        ));
    };

    let mut user = load_user(&state, &principal).await?;
    user.workouts.push(WorkoutEntry {
        date,
        exercise,
        duration_in_minutes,
    });
    state.db.upsert_user(&user).await?;

    Ok(ApiResponse::message("Workout entry added successfully"))
}

#[derive(Debug, Deserialize)]
struct ByDateRequest {
    date: Option<DateTime<Utc>>,
}

async fn get_by_date(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ByDateRequest>,
) -> Result<Json<ApiResponse<Vec<WorkoutEntry>>>> {
    let user = load_user(&state, &principal).await?;

    let (day, message) = match payload.date {
        Some(date) => (date, "Workout entries for the date"),
        None => (start_of_today(Utc::now()), "Workout entries for today"),
    };
    let entries = tracker::filter_by_day(&user.workouts, day);

    Ok(ApiResponse::with_data(message, entries))
}

#[derive(Debug, Deserialize)]
struct ByLimitRequest {
    limit: Option<Limit>,
}

async fn get_by_limit(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ByLimitRequest>,
) -> Result<Json<ApiResponse<Vec<WorkoutEntry>>>> {
    let limit = payload
        .limit
        .ok_or_else(|| AppError::Validation("Please provide limit".to_string()))?;

    let user = load_user(&state, &principal).await?;

    let response = match limit.days()? {
        None => ApiResponse::with_data("All workout entries", user.workouts),
        Some(days) => ApiResponse::with_data(
            format!("Workout entries for the last {} days", days),
            tracker::filter_by_limit(&user.workouts, Utc::now(), days),
        ),
    };

    Ok(response)
}

#[derive(Debug, Deserialize)]
struct DeleteEntryRequest {
    date: Option<DateTime<Utc>>,
}

async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<DeleteEntryRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let date = payload
        .date
        .ok_or_else(|| AppError::Validation("Please provide date".to_string()))?;

    let mut user = load_user(&state, &principal).await?;
    let removed = tracker::delete_by_date(&mut user.workouts, date);
    state.db.upsert_user(&user).await?;

    tracing::debug!(user_id = %user.id, removed, "Workout entries deleted");

    Ok(ApiResponse::message("Workout entry deleted successfully"))
}

#[derive(Serialize)]
struct WorkoutGoal {
    goal: f64,
}

/// Weekly workout-days target, derived from the user's stated objective.
async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
) -> Result<Json<ApiResponse<WorkoutGoal>>> {
    let user = load_user(&state, &principal).await?;

    Ok(ApiResponse::with_data(
        "User workout goal information",
        WorkoutGoal {
            goal: goals::workout_days_goal(user.goal),
        },
    ))
}
