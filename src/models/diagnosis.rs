use serde::{Deserialize, Serialize};

use super::HealthStatus;

/// Immutable verdict returned by the remote diagnosis service.
///
/// Field names mirror the structured-output schema the service is asked to
/// fill, so the wire payload deserializes directly into this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    /// Common name of the identified species.
    pub plant_name: String,
    pub scientific_name: String,
    /// Identification confidence, 0-100.
    pub confidence: f64,
    pub health_status: HealthStatus,
    /// Summary of the findings.
    pub diagnosis: String,
    /// Explanation of the visual symptoms.
    pub reasoning: String,
    /// Actionable care steps, in order.
    pub care_plan: Vec<String>,
    /// Watering interval in days.
    pub suggested_water_frequency: u32,
    /// Misting interval in days, 0 if not needed.
    pub suggested_mist_frequency: u32,
    /// Fertilizing interval in days, 0 if not needed.
    pub suggested_fertilize_frequency: u32,
}
