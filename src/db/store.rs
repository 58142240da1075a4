use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{CareSchedule, DiagnosisResult, HealthStatus, Plant};

/// Partial field set for a plant update. `None` fields keep their stored
/// value.
#[derive(Debug, Clone, Default)]
pub struct PlantPatch {
    pub name: Option<String>,
    pub status: Option<HealthStatus>,
    pub schedule: Option<CareSchedule>,
    pub diagnosis_history: Option<Vec<DiagnosisResult>>,
}

impl PlantPatch {
    pub fn schedule(schedule: CareSchedule) -> Self {
        Self {
            schedule: Some(schedule),
            ..Self::default()
        }
    }
}

/// Record store keyed by plant identity. Operations fail independently;
/// nothing is transactional across plants.
#[async_trait]
pub trait PlantStore: Send + Sync {
    async fn insert(&self, plant: &Plant) -> Result<()>;

    async fn update(
        &self,
        plant_id: &str,
        patch: &PlantPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<()>;

    async fn delete(&self, plant_id: &str) -> Result<()>;

    async fn get(&self, plant_id: &str) -> Result<Option<Plant>>;

    /// All plants owned by `owner_id`, ordered by creation descending.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Plant>>;
}
