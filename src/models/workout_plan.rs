//! Workout plan catalog models.
//!
//! Plans are an independent aggregate: no ownership relation to users,
//! admin-only mutation, public reads.

use serde::{Deserialize, Serialize};

/// A single exercise within a workout plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub description: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Admin-curated workout plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Document id (uuid v4)
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "durationInMinutes")]
    pub duration_in_minutes: f64,
    pub exercises: Vec<Exercise>,
    /// Banner illustration
    #[serde(rename = "imageURL")]
    pub image_url: String,
}
