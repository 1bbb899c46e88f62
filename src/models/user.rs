//! User model: profile plus the per-metric entry logs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A user's stated objective. Drives every goal-threshold calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "weightLoss")]
    WeightLoss,
    #[serde(rename = "weightGain")]
    WeightGain,
    #[serde(rename = "maintain")]
    Maintain,
}

/// User profile stored in Firestore (one document per user).
///
/// The entry vectors are append-only logs. "Current" weight and height are
/// the last entries in storage order, not the most recent by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document id (uuid v4)
    pub id: String,
    pub name: String,
    /// Unique across users
    pub email: String,
    /// bcrypt hash, never the plaintext
    pub password_hash: String,
    /// Free-form; only "male" selects the male BMR branch
    pub gender: String,
    pub dob: NaiveDate,
    pub goal: Goal,
    pub activity_level: String,
    /// When the user registered (RFC3339)
    pub created_at: String,

    pub weight: Vec<WeightEntry>,
    pub height: Vec<HeightEntry>,
    pub sleep: Vec<SleepEntry>,
    pub steps: Vec<StepsEntry>,
    pub water: Vec<WaterEntry>,
    pub workouts: Vec<WorkoutEntry>,
    #[serde(rename = "calorieIntake")]
    pub calorie_intake: Vec<CalorieIntakeEntry>,
}

/// Shared access to the timestamp of a tracked entry, so the windowed
/// filter/delete logic is written once for all seven metrics.
pub trait DatedEntry {
    fn entry_date(&self) -> DateTime<Utc>;
}

macro_rules! impl_dated_entry {
    ($($ty:ty),+) => {
        $(impl DatedEntry for $ty {
            fn entry_date(&self) -> DateTime<Utc> {
                self.date
            }
        })+
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub weight: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightEntry {
    pub height: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepEntry {
    pub date: DateTime<Utc>,
    #[serde(rename = "durationInHrs")]
    pub duration_in_hrs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsEntry {
    pub date: DateTime<Utc>,
    pub steps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub date: DateTime<Utc>,
    #[serde(rename = "amountInMilliliters")]
    pub amount_in_milliliters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub date: DateTime<Utc>,
    pub exercise: String,
    #[serde(rename = "durationInMinutes")]
    pub duration_in_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieIntakeEntry {
    /// What was eaten (e.g. "rice")
    pub item: String,
    pub date: DateTime<Utc>,
    pub quantity: f64,
    /// Unit of `quantity` (e.g. "grams")
    pub quantitytype: String,
    #[serde(rename = "calorieIntake")]
    pub calorie_intake: f64,
}

impl_dated_entry!(
    WeightEntry,
    HeightEntry,
    SleepEntry,
    StepsEntry,
    WaterEntry,
    WorkoutEntry,
    CalorieIntakeEntry
);

impl User {
    /// Last recorded weight in storage order, if any.
    pub fn current_weight(&self) -> Option<f64> {
        self.weight.last().map(|e| e.weight)
    }

    /// Last recorded height in storage order, if any.
    pub fn current_height(&self) -> Option<f64> {
        self.height.last().map(|e| e.height)
    }
}
