// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod admin;
pub mod auth;
pub mod calorie_intake;
pub mod report;
pub mod sleep;
pub mod steps;
pub mod upload;
pub mod water;
pub mod weight;
pub mod workout_plans;
pub mod workouts;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::middleware::{require_admin, require_auth};
use crate::models::User;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{header, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The `{ok, message, data}` envelope shared by every endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    /// A success envelope with no data payload.
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            ok: true,
            message: message.into(),
            data: None,
        })
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// A success envelope carrying a data payload.
    pub fn with_data(message: impl Into<String>, data: T) -> Json<Self> {
        Json(Self {
            ok: true,
            message: message.into(),
            data: Some(data),
        })
    }
}

/// Request-body extractor wrapping [`axum::Json`] so a malformed or missing
/// body comes back as a 400 inside the `{ok, message}` envelope rather than
/// axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Load the authenticated user's document, mapping absence to 404.
pub(crate) async fn load_user(state: &AppState, principal: &AuthUser) -> Result<User> {
    state
        .db
        .get_user(&principal.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", principal.user_id)))
}

/// Liveness response for the root path.
async fn root() -> Json<ApiResponse<()>> {
    ApiResponse::message("The API is working")
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from the frontend URL and localhost (dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(auth::routes())
        .merge(admin::routes())
        .nest("/workoutplans", workout_plans::public_routes())
        .nest("/image-upload", upload::routes());

    // User routes (valid user access token required)
    let user_routes = Router::new()
        .merge(auth::protected_routes())
        .nest("/weighttrack", weight::routes())
        .nest("/sleeptrack", sleep::routes())
        .nest("/steptrack", steps::routes())
        .nest("/watertrack", water::routes())
        .nest("/workouttrack", workouts::routes())
        .nest("/calorieintake", calorie_intake::routes())
        .nest("/report", report::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Admin routes (valid admin token required; user tokens are rejected)
    let admin_routes = Router::new()
        .merge(admin::protected_routes())
        .nest("/workoutplans", workout_plans::admin_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin,
        ));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
