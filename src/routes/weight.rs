// SPDX-License-Identifier: MIT

//! Weight tracking routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::WeightEntry;
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
        .route("/addweightentry", post(add_entry))
        .route("/getweightbydate", post(get_by_date))
        .route("/getweightbylimit", post(get_by_limit))
        .route("/deleteweightentry", delete(delete_entry))
        .route("/getusergoalweight", get(get_goal))
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    date: Option<DateTime<Utc>>,
    #[serde(rename = "weightInKg")]
    weight_in_kg: Option<f64>,
}

async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<AddEntryRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let (Some(date), Some(weight)) = (payload.date, payload.weight_in_kg) else {
        return Err(AppError::Validation(
            "Please provide date and weight".to_string(),
        ));
    };

    let mut user = load_user(&state, &principal).await?;
    user.weight.push(WeightEntry { weight, date });
    state.db.upsert_user(&user).await?;

    Ok(ApiResponse::message("Weight entry added successfully"))
}

#[derive(Debug, Deserialize)]
struct ByDateRequest {
    date: Option<DateTime<Utc>>,
}

/// Entries for one UTC calendar day; defaults to today. A read-only
/// projection — the stored log is never shrunk by this route.
async fn get_by_date(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ByDateRequest>,
) -> Result<Json<ApiResponse<Vec<WeightEntry>>>> {
    let user = load_user(&state, &principal).await?;

    let (day, message) = match payload.date {
        Some(date) => (date, "Weight entries for the date"),
        None => (start_of_today(Utc::now()), "Weight entries for today"),
    };
    let entries = tracker::filter_by_day(&user.weight, day);

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
) -> Result<Json<ApiResponse<Vec<WeightEntry>>>> {
    let limit = payload
        .limit
        .ok_or_else(|| AppError::Validation("Please provide limit".to_string()))?;

    let user = load_user(&state, &principal).await?;

    let response = match limit.days()? {
        None => ApiResponse::with_data("All weight entries", user.weight),
        Some(days) => ApiResponse::with_data(
            format!("Weight entries for the last {} days", days),
            tracker::filter_by_limit(&user.weight, Utc::now(), days),
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
    let removed = tracker::delete_by_date(&mut user.weight, date);
    state.db.upsert_user(&user).await?;

    tracing::debug!(user_id = %user.id, removed, "Weight entries deleted");

    Ok(ApiResponse::message("Weight entry deleted successfully"))
}

#[derive(Serialize)]
struct WeightGoal {
    #[serde(rename = "currentWeight")]
    current_weight: Option<f64>,
    #[serde(rename = "goalWeight")]
    goal_weight: f64,
}

/// Current weight plus the BMI-derived goal weight.
async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
) -> Result<Json<ApiResponse<WeightGoal>>> {
    let user = load_user(&state, &principal).await?;

    let height_cm = user
        .current_height()
        .ok_or_else(|| AppError::Validation("No height entries recorded yet".to_string()))?;

    Ok(ApiResponse::with_data(
        "User goal weight information",
        WeightGoal {
            current_weight: user.current_weight(),
            goal_weight: goals::goal_weight_kg(height_cm),
        },
    ))
}
