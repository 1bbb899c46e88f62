// SPDX-License-Identifier: MIT

//! Sleep tracking routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::SleepEntry;
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
        .route("/addsleepentry", post(add_entry))
        .route("/getsleepbydate", post(get_by_date))
        .route("/getsleepbylimit", post(get_by_limit))
        .route("/deletesleepentry", delete(delete_entry))
        .route("/getusersleep", get(get_goal))
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    date: Option<DateTime<Utc>>,
    #[serde(rename = "durationInHrs")]
    duration_in_hrs: Option<f64>,
}

async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<AddEntryRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let (Some(date), Some(duration_in_hrs)) = (payload.date, payload.duration_in_hrs) else {
        return Err(AppError::Validation(
            "Please provide date and sleep duration".to_string(),
        ));
    };

    let mut user = load_user(&state, &principal).await?;
    user.sleep.push(SleepEntry {
        date,
        duration_in_hrs,
    });
    state.db.upsert_user(&user).await?;

    Ok(ApiResponse::message("Sleep entry added successfully"))
}

#[derive(Debug, Deserialize)]
struct ByDateRequest {
    date: Option<DateTime<Utc>>,
}

async fn get_by_date(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ByDateRequest>,
) -> Result<Json<ApiResponse<Vec<SleepEntry>>>> {
    let user = load_user(&state, &principal).await?;

    let (day, message) = match payload.date {
        Some(date) => (date, "Sleep entries for the date"),
        None => (start_of_today(Utc::now()), "Sleep entries for today"),
    };
    let entries = tracker::filter_by_day(&user.sleep, day);

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
) -> Result<Json<ApiResponse<Vec<SleepEntry>>>> {
    let limit = payload
        .limit
        .ok_or_else(|| AppError::Validation("Please provide limit".to_string()))?;

    let user = load_user(&state, &principal).await?;

    let response = match limit.days()? {
        None => ApiResponse::with_data("All sleep entries", user.sleep),
        Some(days) => ApiResponse::with_data(
            format!("Sleep entries for the last {} days", days),
            tracker::filter_by_limit(&user.sleep, Utc::now(), days),
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
    let removed = tracker::delete_by_date(&mut user.sleep, date);
    state.db.upsert_user(&user).await?;

    tracing::debug!(user_id = %user.id, removed, "Sleep entries deleted");

    Ok(ApiResponse::message("Sleep entry deleted successfully"))
}

#[derive(Serialize)]
struct SleepGoal {
    #[serde(rename = "goalSleep")]
    goal_sleep: f64,
}

async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
) -> Result<Json<ApiResponse<SleepGoal>>> {
    // Sleep target is a fixed constant, not goal-dependent
    load_user(&state, &principal).await?;

    Ok(ApiResponse::with_data(
        "User max sleep information",
        SleepGoal {
            goal_sleep: goals::DAILY_SLEEP_GOAL_HRS,
        },
    ))
}
