// SPDX-License-Identifier: MIT

//! Admin account routes: registration, login, session check.
//!
//! Admin sessions use a single short-lived token signed with its own key;
//! user tokens are never accepted here.

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_token, AuthAdmin, ADMIN_COOKIE, ADMIN_TTL_SECS};
use crate::models::Admin;
use crate::routes::{ApiResponse, JsonBody};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/admin/register", post(register))
        .route("/admin/login", post(login))
}

/// Routes that require a valid admin token (middleware applied in routes/mod.rs).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/admin/checklogin", get(check_login))
}

#[derive(Debug, Deserialize, Validate)]
pub struct AdminRegisterRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<AdminRegisterRequest>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<()>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if state
        .db
        .find_admin_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "Admin with this email already exists".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?;

    let admin = Admin {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        password_hash,
        created_at: format_utc_rfc3339(chrono::Utc::now()),
    };

    state.db.upsert_admin(&admin).await?;

    tracing::info!(admin_id = %admin.id, "Admin registered");

    Ok((
        axum::http::StatusCode::CREATED,
        ApiResponse::message("Admin registered successfully"),
    ))
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AdminToken {
    #[serde(rename = "adminAuthToken")]
    pub admin_auth_token: String,
}

async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<AdminLoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AdminToken>>)> {
    let admin = state
        .db
        .find_admin_by_email(&payload.email)
        .await?
        .ok_or_else(|| AppError::Validation("Invalid admin credentials".to_string()))?;

    let matches = bcrypt::verify(&payload.password, &admin.password_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password verify failed: {}", e)))?;
    if !matches {
        return Err(AppError::Validation(
            "Invalid admin credentials".to_string(),
        ));
    }

    let token = create_token(&admin.id, &state.config.jwt_admin_key, ADMIN_TTL_SECS)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token creation failed: {}", e)))?;

    let cookie = Cookie::build((ADMIN_COOKIE, token.clone()))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build();
    let jar = jar.add(cookie);

    tracing::info!(admin_id = %admin.id, "Admin login successful");

    Ok((
        jar,
        ApiResponse::with_data(
            "Admin login successful",
            AdminToken {
                admin_auth_token: token,
            },
        ),
    ))
}

#[derive(Serialize)]
pub struct AdminCheckResponse {
    #[serde(rename = "adminId")]
    pub admin_id: String,
}

async fn check_login(Extension(admin): Extension<AuthAdmin>) -> Json<ApiResponse<AdminCheckResponse>> {
    ApiResponse::with_data(
        "Admin authenticated successfully",
        AdminCheckResponse {
            admin_id: admin.admin_id,
        },
    )
}
