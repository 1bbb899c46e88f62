// SPDX-License-Identifier: MIT

//! FitTrack API Server
//!
//! Tracks per-user daily health metrics (weight, sleep, steps, water,
//! workouts, calorie intake), serves the aggregated 10-day report, and
//! manages the admin-curated workout-plan catalog.

use fittrack::{
    config::Config,
    db::FirestoreDb,
    services::{MailerService, MediaService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting FitTrack API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Initialize mail collaborator for OTP delivery
    let mailer = MailerService::new(
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    );
    tracing::info!("Mailer initialized");

    // Initialize image pipeline
    let media = MediaService::new(
        &config.cloudinary_cloud_name,
        config.cloudinary_upload_preset.clone(),
    );
    tracing::info!(cloud = %config.cloudinary_cloud_name, "Media pipeline initialized");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        mailer,
        media,
    });

    // Build router
    let app = fittrack::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fittrack=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
