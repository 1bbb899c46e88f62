// SPDX-License-Identifier: MIT

//! Aggregated progress report route.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::ReportItem;
use crate::routes::{load_user, ApiResponse};
use crate::services::report::build_report;
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/getreport", get(get_report))
}

/// Seven fixed-order metrics summed over the trailing 10-day window,
/// each paired with its goal where one exists.
async fn get_report(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<AuthUser>,
) -> Result<Json<ApiResponse<Vec<ReportItem>>>> {
    let user = load_user(&state, &principal).await?;
    let items = build_report(&user, chrono::Utc::now())?;

    Ok(ApiResponse::with_data("Report", items))
}
