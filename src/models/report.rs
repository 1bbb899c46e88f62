//! Daily report response model.

use serde::{Serialize, Serializer};

/// One line of the daily report: a metric's windowed value, its target, and
/// the unit both are expressed in.
#[derive(Debug, Clone, Serialize)]
pub struct ReportItem {
    pub name: &'static str,
    pub value: f64,
    /// Height has no target concept, so its goal serializes as an empty
    /// string rather than a number.
    #[serde(serialize_with = "serialize_goal")]
    pub goal: Option<f64>,
    pub unit: &'static str,
}

fn serialize_goal<S>(goal: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match goal {
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_str(""),
    }
}
