// SPDX-License-Identifier: MIT

//! Calorie intake tracking routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::CalorieIntakeEntry;
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
        .route("/addcalorieintake", post(add_entry))
        .route("/getcalorieintakebydate", post(get_by_date))
        .route("/getcalorieintakebylimit", post(get_by_limit))
        .route("/deletecalorieintake", delete(delete_entry))
        .route("/getgoalcalorieintake", get(get_goal))
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    item: Option<String>,
    date: Option<DateTime<Utc>>,
    quantity: Option<f64>,
    quantitytype: Option<String>,
    #[serde(rename = "calorieIntake")]
    calorie_intake: Option<f64>,
}

async fn add_entry(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<AddEntryRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let (Some(item), Some(date), Some(quantity), Some(quantitytype), Some(calorie_intake)) = (
        payload.item,
        payload.date,
        payload.quantity,
        payload.quantitytype,
        payload.calorie_intake,
    ) else {
        return Err(AppError::Validation(
            "Please provide item, date, quantity, quantity type and calorie intake".to_string(),
        ));
    };

    let mut user = load_user(&state, &principal).await?;
    user.calorie_intake.push(CalorieIntakeEntry {
        item,
        date,
        quantity,
        quantitytype,
        calorie_intake,
    });
    state.db.upsert_user(&user).await?;

    Ok(ApiResponse::message(
        "Calorie intake entry added successfully",
    ))
}

#[derive(Debug, Deserialize)]
struct ByDateRequest {
    date: Option<DateTime<Utc>>,
}

async fn get_by_date(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ByDateRequest>,
) -> Result<Json<ApiResponse<Vec<CalorieIntakeEntry>>>> {
    let user = load_user(&state, &principal).await?;

    let (day, message) = match payload.date {
        Some(date) => (date, "Calorie intake entries for the date"),
        None => (
            start_of_today(Utc::now()),
            "Calorie intake entries for today",
        ),
    };
    let entries = tracker::filter_by_day(&user.calorie_intake, day);

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
) -> Result<Json<ApiResponse<Vec<CalorieIntakeEntry>>>> {
    let limit = payload
        .limit
        .ok_or_else(|| AppError::Validation("Please provide limit".to_string()))?;

    let user = load_user(&state, &principal).await?;

    let response = match limit.days()? {
        None => ApiResponse::with_data("All calorie intake entries", user.calorie_intake),
        Some(days) => ApiResponse::with_data(
            format!("Calorie intake entries for the last {} days", days),
            tracker::filter_by_limit(&user.calorie_intake, Utc::now(), days),
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
    let removed = tracker::delete_by_date(&mut user.calorie_intake, date);
    state.db.upsert_user(&user).await?;

    tracing::debug!(user_id = %user.id, removed, "Calorie intake entries deleted");

    Ok(ApiResponse::message(
        "Calorie intake entry deleted successfully",
    ))
}

#[derive(Serialize)]
struct CalorieGoal {
    #[serde(rename = "maxCalorieIntake")]
    max_calorie_intake: f64,
}

/// Daily calorie ceiling from the BMR shifted by the user's objective.
/// Needs at least one weight and one height entry to compute the BMR.
async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
) -> Result<Json<ApiResponse<CalorieGoal>>> {
    let user = load_user(&state, &principal).await?;

    let weight = user
        .current_weight()
        .ok_or_else(|| AppError::Validation("No weight entries recorded yet".to_string()))?;
    let height = user
        .current_height()
        .ok_or_else(|| AppError::Validation("No height entries recorded yet".to_string()))?;

    let age = goals::age_in_years(user.dob, Utc::now().date_naive());
    let bmr = goals::bmr(&user.gender, weight, height, age);

    Ok(ApiResponse::with_data(
        "User calorie intake goal information",
        CalorieGoal {
            max_calorie_intake: goals::daily_calorie_goal(user.goal, bmr),
        },
    ))
}
