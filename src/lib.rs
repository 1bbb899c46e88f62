// SPDX-License-Identifier: MIT

//! FitTrack: per-user health-metric tracking backend.
//!
//! This crate provides the backend API for tracking daily health metrics
//! (weight, sleep, steps, water, workouts, calorie intake), generating the
//! 10-day report, and managing the admin-curated workout-plan catalog.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::{MailerService, MediaService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub mailer: MailerService,
    pub media: MediaService,
}
