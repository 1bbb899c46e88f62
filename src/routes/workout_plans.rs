// SPDX-License-Identifier: MIT

//! Workout plan catalog routes.
//!
//! Reads are public; writes require an admin token. Both routers are nested
//! under /workoutplans, so the same paths carry different methods depending
//! on the caller.

use crate::error::{AppError, Result};
use crate::models::{Exercise, WorkoutPlan};
use crate::routes::{ApiResponse, JsonBody};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", get(list_plans))
        .route("/workouts/{id}", get(get_plan))
}

pub fn admin_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/workouts", post(create_plan))
        .route("/workouts/{id}", put(update_plan))
        .route("/workouts/{id}", delete(delete_plan))
}

async fn list_plans(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<WorkoutPlan>>>> {
    let plans = state.db.list_workout_plans().await?;
    Ok(ApiResponse::with_data("Workout plans fetched", plans))
}

async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<WorkoutPlan>>> {
    let plan = state
        .db
        .get_workout_plan(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Workout plan {}", id)))?;

    Ok(ApiResponse::with_data("Workout plan fetched", plan))
}

#[derive(Debug, Deserialize, Validate)]
pub struct ExercisePayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WorkoutPlanPayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
    #[serde(rename = "durationInMinutes")]
    pub duration_in_minutes: f64,
    #[validate(nested)]
    pub exercises: Vec<ExercisePayload>,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl WorkoutPlanPayload {
    fn into_plan(self, id: String) -> WorkoutPlan {
        WorkoutPlan {
            id,
            name: self.name,
            description: self.description,
            duration_in_minutes: self.duration_in_minutes,
            exercises: self
                .exercises
                .into_iter()
                .map(|e| Exercise {
                    name: e.name,
                    description: e.description,
                    sets: e.sets,
                    reps: e.reps,
                    image_url: e.image_url,
                })
                .collect(),
            image_url: self.image_url,
        }
    }
}

async fn create_plan(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<WorkoutPlanPayload>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<WorkoutPlan>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let plan = payload.into_plan(uuid::Uuid::new_v4().to_string());
    state.db.upsert_workout_plan(&plan).await?;

    tracing::info!(plan_id = %plan.id, "Workout plan created");

    Ok((
        axum::http::StatusCode::CREATED,
        ApiResponse::with_data("Workout plan created successfully", plan),
    ))
}

/// Full overwrite of an existing plan; partial updates are not supported.
async fn update_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<WorkoutPlanPayload>,
) -> Result<Json<ApiResponse<WorkoutPlan>>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if state.db.get_workout_plan(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Workout plan {}", id)));
    }

    let plan = payload.into_plan(id);
    state.db.upsert_workout_plan(&plan).await?;

    Ok(ApiResponse::with_data(
        "Workout plan updated successfully",
        plan,
    ))
}

async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    if state.db.get_workout_plan(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Workout plan {}", id)));
    }

    state.db.delete_workout_plan(&id).await?;

    tracing::info!(plan_id = %id, "Workout plan deleted");

    Ok(ApiResponse::message("Workout plan deleted successfully"))
}
