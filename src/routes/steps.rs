// SPDX-License-Identifier: MIT

//! Step tracking routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::StepsEntry;
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
        .route("/addstepentry", post(add_entry))
        .route("/getstepsbydate", post(get_by_date))
        .route("/getstepsbylimit", post(get_by_limit))
        .route("/deletestepentry", delete(delete_entry))
        .route("/getusergoalsteps", get(get_goal))
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    date: Option<DateTime<Utc>>,
    steps: Option<f64>,
}

async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<AddEntryRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let (Some(date), Some(steps)) = (payload.date, payload.steps) else {
        return Err(AppError::Validation(
            "Please provide date and step count".to_string(),
        ));
    };

    let mut user = load_user(&state, &principal).await?;
    user.steps.push(StepsEntry { date, steps });
    state.db.upsert_user(&user).await?;

    Ok(ApiResponse::message("Step entry added successfully"))
}

#[derive(Debug, Deserialize)]
struct ByDateRequest {
    date: Option<DateTime<Utc>>,
}

async fn get_by_date(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ByDateRequest>,
) -> Result<Json<ApiResponse<Vec<StepsEntry>>>> {
    let user = load_user(&state, &principal).await?;

    let (day, message) = match payload.date {
        Some(date) => (date, "Step entries for the date"),
        None => (start_of_today(Utc::now()), "Step entries for today"),
    };
    let entries = tracker::filter_by_day(&user.steps, day);

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
) -> Result<Json<ApiResponse<Vec<StepsEntry>>>> {
    let limit = payload
        .limit
        .ok_or_else(|| AppError::Validation("Please provide limit".to_string()))?;

    let user = load_user(&state, &principal).await?;

    let response = match limit.days()? {
        None => ApiResponse::with_data("All step entries", user.steps),
        Some(days) => ApiResponse::with_data(
            format!("Step entries for the last {} days", days),
            tracker::filter_by_limit(&user.steps, Utc::now(), days),
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
    let removed = tracker::delete_by_date(&mut user.steps, date);
    state.db.upsert_user(&user).await?;

    tracing::debug!(user_id = %user.id, removed, "Step entries deleted");

    Ok(ApiResponse::message("Step entry deleted successfully"))
}

#[derive(Serialize)]
struct StepsGoal {
    #[serde(rename = "totalSteps")]
    total_steps: f64,
}

async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
) -> Result<Json<ApiResponse<StepsGoal>>> {
    let user = load_user(&state, &principal).await?;

    Ok(ApiResponse::with_data(
        "User step goal information",
        StepsGoal {
            total_steps: goals::daily_steps_goal(user.goal),
        },
    ))
}
