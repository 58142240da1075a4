//! Application layer: the garden controller the screen layer drives, the
//! events it pushes back, and view-state routing.

mod controller;
mod events;
mod view;

use thiserror::Error;

use crate::diagnosis::DiagnosisError;

pub use controller::GardenController;
pub use events::AppEvent;
pub use view::{PendingDiagnosis, Router, Screen, View};

/// Errors surfaced to the screen layer. Validation failures are rejected
/// before anything reaches persistence.
#[derive(Debug, Error)]
pub enum CareError {
    #[error("no signed-in user")]
    SignedOut,
    #[error("plant not found")]
    PlantNotFound,
    #[error("unknown species '{0}'")]
    UnknownSpecies(String),
    #[error("watering frequency must be at least one day")]
    WaterFrequencyRequired,
    #[error("plant name cannot be empty")]
    EmptyName,
    #[error(transparent)]
    Diagnosis(#[from] DiagnosisError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
