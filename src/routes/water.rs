// SPDX-License-Identifier: MIT

//! Water intake tracking routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::WaterEntry;
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
        .route("/addwaterentry", post(add_entry))
        .route("/getwaterbydate", post(get_by_date))
        .route("/getwaterbylimit", post(get_by_limit))
        .route("/deletewaterentry", delete(delete_entry))
        .route("/getusergoalwater", get(get_goal))
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    date: Option<DateTime<Utc>>,
    #[serde(rename = "amountInMilliliters")]
    amount_in_milliliters: Option<f64>,
}

async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<AddEntryRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let (Some(date), Some(amount_in_milliliters)) = (payload.date, payload.amount_in_milliliters)
    else {
        return Err(AppError::Validation(
            "Please provide date and water amount".to_string(),
        ));
    };

    let mut user = load_user(&state, &principal).await?;
    user.water.push(WaterEntry {
        date,
        amount_in_milliliters,
    });
    state.db.upsert_user(&user).await?;

    Ok(ApiResponse::message("Water entry added successfully"))
}

#[derive(Debug, Deserialize)]
struct ByDateRequest {
    date: Option<DateTime<Utc>>,
}

async fn get_by_date(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ByDateRequest>,
) -> Result<Json<ApiResponse<Vec<WaterEntry>>>> {
    let user = load_user(&state, &principal).await?;

    let (day, message) = match payload.date {
        Some(date) => (date, "Water entries for the date"),
        None => (start_of_today(Utc::now()), "Water entries for today"),
    };
    let entries = tracker::filter_by_day(&user.water, day);

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
) -> Result<Json<ApiResponse<Vec<WaterEntry>>>> {
    let limit = payload
        .limit
        .ok_or_else(|| AppError::Validation("Please provide limit".to_string()))?;

    let user = load_user(&state, &principal).await?;

    let response = match limit.days()? {
        None => ApiResponse::with_data("All water entries", user.water),
        Some(days) => ApiResponse::with_data(
            format!("Water entries for the last {} days", days),
            tracker::filter_by_limit(&user.water, Utc::now(), days),
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
    let removed = tracker::delete_by_date(&mut user.water, date);
    state.db.upsert_user(&user).await?;

    tracing::debug!(user_id = %user.id, removed, "Water entries deleted");

    Ok(ApiResponse::message("Water entry deleted successfully"))
}

#[derive(Serialize)]
struct WaterGoal {
    #[serde(rename = "goalWater")]
    goal_water: f64,
}

async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
) -> Result<Json<ApiResponse<WaterGoal>>> {
    // Daily hydration target is a fixed constant
    load_user(&state, &principal).await?;

    Ok(ApiResponse::with_data(
        "User water goal information",
        WaterGoal {
            goal_water: goals::DAILY_WATER_GOAL_ML,
        },
    ))
}
