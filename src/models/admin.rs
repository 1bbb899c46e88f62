//! Admin model for the workout-catalog management routes.

use serde::{Deserialize, Serialize};

/// Admin account stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    /// Document id (uuid v4)
    pub id: String,
    pub name: String,
    /// Unique across admins
    pub email: String,
    /// bcrypt hash
    pub password_hash: String,
    pub created_at: String,
}
