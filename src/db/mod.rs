//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const ADMINS: &str = "admins";
    pub const WORKOUT_PLANS: &str = "workout_plans";
}
