// SPDX-License-Identifier: MIT

//! User registration, login, OTP, and session routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::{
    create_token, AUTH_COOKIE, REFRESH_COOKIE, USER_ACCESS_TTL_SECS, USER_REFRESH_TTL_SECS,
};
use crate::models::{Goal, HeightEntry, User, WeightEntry};
use crate::routes::{ApiResponse, JsonBody};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/sendotp", post(send_otp))
        .route("/auth/logout", post(logout))
}

/// Routes that require a valid user token (middleware applied in routes/mod.rs).
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/checklogin", post(check_login))
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(rename = "weightInKg")]
    pub weight_in_kg: f64,
    #[serde(rename = "heightInCm")]
    pub height_in_cm: f64,
    pub gender: String,
    pub dob: chrono::NaiveDate,
    pub goal: Goal,
    #[serde(rename = "activityLevel")]
    pub activity_level: String,
}

/// Register a new user, seeding the weight and height logs with one entry
/// each. Duplicate emails are rejected before anything is persisted.
async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<()>>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    if state
        .db
        .find_user_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?;

    let now = chrono::Utc::now();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        password_hash,
        gender: payload.gender,
        dob: payload.dob,
        goal: payload.goal,
        activity_level: payload.activity_level,
        created_at: format_utc_rfc3339(now),
        weight: vec![WeightEntry {
            weight: payload.weight_in_kg,
            date: now,
        }],
        height: vec![HeightEntry {
            height: payload.height_in_cm,
            date: now,
        }],
        sleep: vec![],
        steps: vec![],
        water: vec![],
        workouts: vec![],
        calorie_intake: vec![],
    };

    state.db.upsert_user(&user).await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        axum::http::StatusCode::CREATED,
        ApiResponse::message("User registered successfully"),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenPair {
    #[serde(rename = "authToken")]
    pub auth_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Session cookie with the hardening flags applied everywhere.
fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .build()
}

/// Log a user in: bcrypt-compare the password, then issue the access and
/// refresh tokens both in the payload and as http-only cookies.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<TokenPair>>)> {
    let user = state
        .db
        .find_user_by_email(&payload.email)
        .await?
        .ok_or_else(|| AppError::Validation("Invalid credentials".to_string()))?;

    let matches = bcrypt::verify(&payload.password, &user.password_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password verify failed: {}", e)))?;
    if !matches {
        return Err(AppError::Validation("Invalid credentials".to_string()));
    }

    let auth_token = create_token(&user.id, &state.config.jwt_user_key, USER_ACCESS_TTL_SECS)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token creation failed: {}", e)))?;
    let refresh_token = create_token(
        &user.id,
        &state.config.jwt_refresh_key,
        USER_REFRESH_TTL_SECS,
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Token creation failed: {}", e)))?;

    let jar = jar
        .add(session_cookie(AUTH_COOKIE, auth_token.clone()))
        .add(session_cookie(REFRESH_COOKIE, refresh_token.clone()));

    tracing::info!(user_id = %user.id, "Login successful");

    Ok((
        jar,
        ApiResponse::with_data(
            "Login successful",
            TokenPair {
                auth_token,
                refresh_token,
            },
        ),
    ))
}

#[derive(Debug, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

/// Generate a 6-digit code and dispatch it via the mail collaborator.
/// The code is deliberately absent from the response body.
async fn send_otp(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<SendOtpRequest>,
) -> Result<Json<ApiResponse<()>>> {
    if payload.email.is_empty() {
        return Err(AppError::Validation("Please provide email".to_string()));
    }

    let otp = crate::services::MailerService::generate_otp();
    state.mailer.send_otp(&payload.email, otp).await?;

    Ok(ApiResponse::message("OTP sent successfully"))
}

/// Auth-gated ping confirming the caller's token is still valid.
async fn check_login() -> Json<ApiResponse<()>> {
    ApiResponse::message("User authenticated successfully")
}

/// Clear both session cookies.
async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<()>>) {
    let jar = jar
        .remove(session_cookie(AUTH_COOKIE, String::new()))
        .remove(session_cookie(REFRESH_COOKIE, String::new()));

    (jar, ApiResponse::message("Logout successful"))
}
