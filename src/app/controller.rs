use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{error, info};
use tokio::sync::{broadcast, Mutex};
use uuid::Uuid;

use super::{AppEvent, CareError};
use crate::{
    auth::SessionStore,
    care,
    catalog,
    db::{PlantPatch, PlantStore},
    diagnosis::DiagnosisProvider,
    models::{CareKind, DiagnosisResult, HealthStatus, Plant},
};

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Owns the in-memory plant list and orchestrates the engine, the diagnosis
/// collaborator and the record store.
///
/// Mutations are applied optimistically under the controller's own lock and
/// persisted by fire-and-forget background tasks. A failed create/save is
/// rolled back; a failed patch is logged and left for the next full reload.
#[derive(Clone)]
pub struct GardenController {
    plants: Arc<Mutex<Vec<Plant>>>,
    store: Arc<dyn PlantStore>,
    provider: Arc<dyn DiagnosisProvider>,
    session: Arc<SessionStore>,
    events: broadcast::Sender<AppEvent>,
}

impl GardenController {
    pub fn new(
        store: Arc<dyn PlantStore>,
        provider: Arc<dyn DiagnosisProvider>,
        session: Arc<SessionStore>,
    ) -> Self {
        let (events, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            plants: Arc::new(Mutex::new(Vec::new())),
            store,
            provider,
            session,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current in-memory plant list, newest first.
    pub async fn plants(&self) -> Vec<Plant> {
        self.plants.lock().await.clone()
    }

    /// Replace the in-memory list with the stored plants for the current
    /// session owner.
    pub async fn load_plants(&self) -> Result<Vec<Plant>, CareError> {
        let owner = self.owner_id()?;
        let loaded = self.store.list_for_owner(&owner).await?;
        info!("Loaded {} plants for {}", loaded.len(), owner);

        {
            let mut plants = self.plants.lock().await;
            *plants = loaded.clone();
        }
        self.emit(AppEvent::PlantsChanged);
        Ok(loaded)
    }

    /// Ask the diagnosis collaborator about a photo. Pure delegation; nothing
    /// is stored until the user decides to keep the result.
    pub async fn diagnose(&self, image_jpeg: &[u8]) -> Result<DiagnosisResult, CareError> {
        Ok(self.provider.diagnose(image_jpeg).await?)
    }

    /// Optimistically add a plant, then persist it in the background. If the
    /// insert fails the plant is removed again and a failure event is
    /// emitted.
    pub async fn save_plant(&self, plant: Plant) -> Result<(), CareError> {
        {
            let mut plants = self.plants.lock().await;
            plants.insert(0, plant.clone());
        }
        self.emit(AppEvent::PlantsChanged);

        let store = self.store.clone();
        let plants = self.plants.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            if let Err(err) = store.insert(&plant).await {
                error!("Failed to save plant {}: {err:#}", plant.id);
                {
                    let mut guard = plants.lock().await;
                    guard.retain(|p| p.id != plant.id);
                }
                let _ = events.send(AppEvent::PlantSaveFailed {
                    plant_id: plant.id,
                    message: err.to_string(),
                });
                let _ = events.send(AppEvent::PlantsChanged);
            }
        });

        Ok(())
    }

    /// Adopt a species template: the new plant starts thriving and
    /// just-cared-for across every suggested dimension.
    pub async fn add_plant_from_species(
        &self,
        species_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Plant, CareError> {
        let owner = self.owner_id()?;
        let species = catalog::find(species_id)
            .ok_or_else(|| CareError::UnknownSpecies(species_id.to_string()))?;

        let plant = Plant {
            id: Uuid::new_v4().to_string(),
            owner_id: owner,
            name: species.common_name.to_string(),
            species: species.scientific_name.to_string(),
            image_ref: Some(species.image_url.to_string()),
            acquired_at: now,
            status: HealthStatus::Thriving,
            schedule: care::instantiate(species, now),
            diagnosis_history: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        self.save_plant(plant.clone()).await?;
        Ok(plant)
    }

    /// Keep a diagnosis: the new plant adopts the diagnosed status and
    /// suggested frequencies, with the verdict seeding its history.
    pub async fn add_plant_from_diagnosis(
        &self,
        result: DiagnosisResult,
        image_ref: Option<String>,
        nickname: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Plant, CareError> {
        let owner = self.owner_id()?;
        let name = nickname
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| result.plant_name.clone());

        let plant = Plant {
            id: Uuid::new_v4().to_string(),
            owner_id: owner,
            name,
            species: result.scientific_name.clone(),
            image_ref,
            acquired_at: now,
            status: result.health_status,
            schedule: care::instantiate_from_diagnosis(&result, now),
            diagnosis_history: vec![result],
            created_at: now,
            updated_at: now,
        };

        self.save_plant(plant.clone()).await?;
        Ok(plant)
    }

    /// Mark a care task done. An inactive dimension is a no-op and never
    /// reaches persistence.
    pub async fn mark_care_done(
        &self,
        plant_id: &str,
        kind: CareKind,
        now: DateTime<Utc>,
    ) -> Result<(), CareError> {
        let schedule = {
            let mut plants = self.plants.lock().await;
            let plant = plants
                .iter_mut()
                .find(|p| p.id == plant_id)
                .ok_or(CareError::PlantNotFound)?;

            let advanced = care::advance(&plant.schedule, kind, now);
            if advanced == plant.schedule {
                return Ok(());
            }
            plant.schedule = advanced.clone();
            plant.updated_at = now;
            advanced
        };

        self.emit(AppEvent::PlantsChanged);
        self.persist_patch(plant_id.to_string(), PlantPatch::schedule(schedule), now);
        Ok(())
    }

    /// Apply a frequency edit. Water cannot be deactivated; other dimensions
    /// accept 0 to clear their timestamps.
    pub async fn set_frequency(
        &self,
        plant_id: &str,
        kind: CareKind,
        frequency_days: u32,
        now: DateTime<Utc>,
    ) -> Result<(), CareError> {
        if kind == CareKind::Water && frequency_days == 0 {
            return Err(CareError::WaterFrequencyRequired);
        }

        let schedule = {
            let mut plants = self.plants.lock().await;
            let plant = plants
                .iter_mut()
                .find(|p| p.id == plant_id)
                .ok_or(CareError::PlantNotFound)?;

            let rescheduled = care::reschedule(&plant.schedule, kind, frequency_days, now);
            plant.schedule = rescheduled.clone();
            plant.updated_at = now;
            rescheduled
        };

        self.emit(AppEvent::PlantsChanged);
        self.persist_patch(plant_id.to_string(), PlantPatch::schedule(schedule), now);
        Ok(())
    }

    /// The detail-screen edit form: rename plus a watering-frequency edit,
    /// validated together before anything changes.
    pub async fn update_details(
        &self,
        plant_id: &str,
        name: &str,
        water_frequency_days: u32,
        now: DateTime<Utc>,
    ) -> Result<(), CareError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CareError::EmptyName);
        }
        if water_frequency_days == 0 {
            return Err(CareError::WaterFrequencyRequired);
        }

        let schedule = {
            let mut plants = self.plants.lock().await;
            let plant = plants
                .iter_mut()
                .find(|p| p.id == plant_id)
                .ok_or(CareError::PlantNotFound)?;

            let rescheduled =
                care::reschedule(&plant.schedule, CareKind::Water, water_frequency_days, now);
            plant.name = name.to_string();
            plant.schedule = rescheduled.clone();
            plant.updated_at = now;
            rescheduled
        };

        self.emit(AppEvent::PlantsChanged);
        self.persist_patch(
            plant_id.to_string(),
            PlantPatch {
                name: Some(name.to_string()),
                schedule: Some(schedule),
                ..PlantPatch::default()
            },
            now,
        );
        Ok(())
    }

    /// Record a new checkup for an existing plant.
    pub async fn append_diagnosis(
        &self,
        plant_id: &str,
        result: DiagnosisResult,
        now: DateTime<Utc>,
    ) -> Result<(), CareError> {
        let (status, history) = {
            let mut plants = self.plants.lock().await;
            let plant = plants
                .iter_mut()
                .find(|p| p.id == plant_id)
                .ok_or(CareError::PlantNotFound)?;

            plant.record_diagnosis(result);
            plant.updated_at = now;
            (plant.status, plant.diagnosis_history.clone())
        };

        self.emit(AppEvent::PlantsChanged);
        self.persist_patch(
            plant_id.to_string(),
            PlantPatch {
                status: Some(status),
                diagnosis_history: Some(history),
                ..PlantPatch::default()
            },
            now,
        );
        Ok(())
    }

    /// Delete a plant and everything it owns (schedule, history).
    pub async fn delete_plant(&self, plant_id: &str) -> Result<(), CareError> {
        {
            let mut plants = self.plants.lock().await;
            let before = plants.len();
            plants.retain(|p| p.id != plant_id);
            if plants.len() == before {
                return Err(CareError::PlantNotFound);
            }
        }
        self.emit(AppEvent::PlantsChanged);

        let store = self.store.clone();
        let plant_id = plant_id.to_string();
        tokio::spawn(async move {
            if let Err(err) = store.delete(&plant_id).await {
                error!("Failed to delete plant {plant_id}: {err:#}");
            }
        });
        Ok(())
    }

    fn owner_id(&self) -> Result<String, CareError> {
        self.session
            .current()
            .owner_id()
            .map(str::to_string)
            .ok_or(CareError::SignedOut)
    }

    fn emit(&self, event: AppEvent) {
        let _ = self.events.send(event);
    }

    /// Background persistence for an already-applied local update. Failures
    /// are logged, never retried; the next full reload reconciles.
    fn persist_patch(&self, plant_id: String, patch: PlantPatch, updated_at: DateTime<Utc>) {
        let store = self.store.clone();
        tokio::spawn(async move {
            if let Err(err) = store.update(&plant_id, &patch, updated_at).await {
                error!("Failed to persist update for plant {plant_id}: {err:#}");
            }
        });
    }
}
