// SPDX-License-Identifier: MIT

use fittrack::config::Config;
use fittrack::db::FirestoreDb;
use fittrack::routes::create_router;
use fittrack::services::{MailerService, MediaService};
use fittrack::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

/// Create a test app backed by the Firestore emulator, with offline mail
/// and media collaborators. Only meaningful behind `require_emulator!`.
#[allow(dead_code)]
pub async fn create_emulator_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db().await;
    let mailer = MailerService::new_mock();
    let media = MediaService::new_mock();

    let state = Arc::new(AppState {
        config,
        db,
        mailer,
        media,
    });

    (create_router(state.clone()), state)
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = test_db_offline();
    let mailer = MailerService::new_mock();
    let media = MediaService::new_mock();

    let state = Arc::new(AppState {
        config,
        db,
        mailer,
        media,
    });

    (create_router(state.clone()), state)
}

/// Create a signed test JWT for the given subject and key.
#[allow(dead_code)]
pub fn create_test_jwt(subject: &str, signing_key: &[u8]) -> String {
    fittrack::middleware::auth::create_token(subject, signing_key, 3600)
        .expect("Failed to create test token")
}
