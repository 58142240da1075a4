use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CareSchedule, DiagnosisResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthStatus {
    Thriving,
    Recovering,
    Critical,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Thriving => "Thriving",
            HealthStatus::Recovering => "Recovering",
            HealthStatus::Critical => "Critical",
        }
    }
}

/// A tracked plant, owned by exactly one user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub owner_id: String,
    /// Nickname shown on the dashboard.
    pub name: String,
    pub species: String,
    pub image_ref: Option<String>,
    pub acquired_at: DateTime<Utc>,
    pub status: HealthStatus,
    pub schedule: CareSchedule,
    /// Append-only checkup history, newest first.
    pub diagnosis_history: Vec<DiagnosisResult>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plant {
    /// Record a new checkup at the head of the history and adopt its verdict.
    pub fn record_diagnosis(&mut self, result: DiagnosisResult) {
        self.status = result.health_status;
        self.diagnosis_history.insert(0, result);
    }
}
