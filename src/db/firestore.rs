// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile + tracked entry logs, one document per user)
//! - Admins (catalog management accounts)
//! - Workout plans (admin-curated catalog)
//!
//! All reads and writes are per-document; two concurrent writes to the same
//! user document are last-write-wins.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Admin, User, WorkoutPlan};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by document id.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by their unique email, if one exists.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_string();
        let users: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.field("email").eq(email.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(users.into_iter().next())
    }

    /// Create or replace a user document.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Admin Operations ────────────────────────────────────────

    /// Get an admin by document id.
    pub async fn get_admin(&self, admin_id: &str) -> Result<Option<Admin>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ADMINS)
            .obj()
            .one(admin_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find an admin by their unique email, if one exists.
    pub async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        let email = email.to_string();
        let admins: Vec<Admin> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ADMINS)
            .filter(move |q| q.field("email").eq(email.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(admins.into_iter().next())
    }

    /// Create or replace an admin document.
    pub async fn upsert_admin(&self, admin: &Admin) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::ADMINS)
            .document_id(&admin.id)
            .object(admin)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Workout Plan Operations ─────────────────────────────────

    /// List all workout plans in the catalog.
    pub async fn list_workout_plans(&self) -> Result<Vec<WorkoutPlan>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUT_PLANS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a single workout plan by id.
    pub async fn get_workout_plan(&self, plan_id: &str) -> Result<Option<WorkoutPlan>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::WORKOUT_PLANS)
            .obj()
            .one(plan_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or fully overwrite a workout plan.
    pub async fn upsert_workout_plan(&self, plan: &WorkoutPlan) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::WORKOUT_PLANS)
            .document_id(&plan.id)
            .object(plan)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a workout plan outright. No soft-delete, no reference checks;
    /// plans are never referenced by user documents.
    pub async fn delete_workout_plan(&self, plan_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::WORKOUT_PLANS)
            .document_id(plan_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
