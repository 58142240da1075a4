use serde::{Deserialize, Serialize};

use crate::auth::Session;
use crate::models::DiagnosisResult;

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum View {
    #[default]
    Dashboard,
    Camera,
    Expert,
    Database,
    Premium,
}

/// A diagnosis waiting for the user to save or discard it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDiagnosis {
    pub result: DiagnosisResult,
    /// The captured photo the result was produced from.
    pub image: String,
}

/// What the screen layer should present right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    Dashboard,
    Camera,
    DiagnosisResult(PendingDiagnosis),
    Expert,
    SpeciesCatalog,
    SpeciesDetail(String),
    PlantDetail(String),
    Premium,
}

/// View-state routing between screens.
///
/// Holds the selected tab plus the overlay selections (plant, species,
/// pending diagnosis) and resolves them with a fixed precedence: pending
/// diagnosis, then camera, then expert, then the species catalog (detail
/// first), then a selected plant, then the dashboard. Everything is gated
/// behind login while the session is anonymous.
#[derive(Debug, Clone, Default)]
pub struct Router {
    view: View,
    selected_plant: Option<String>,
    selected_species: Option<String>,
    pending_diagnosis: Option<PendingDiagnosis>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Switch tabs. Leaving a tab drops its selections, like the original
    /// navigation does.
    pub fn change_view(&mut self, view: View) {
        self.view = view;
        self.selected_plant = None;
        self.selected_species = None;
    }

    pub fn select_plant(&mut self, plant_id: impl Into<String>) {
        self.view = View::Dashboard;
        self.selected_plant = Some(plant_id.into());
    }

    pub fn clear_plant(&mut self) {
        self.selected_plant = None;
    }

    pub fn select_species(&mut self, species_id: impl Into<String>) {
        self.view = View::Database;
        self.selected_species = Some(species_id.into());
    }

    pub fn clear_species(&mut self) {
        self.selected_species = None;
    }

    /// Hand over a completed diagnosis; it overlays every other screen
    /// until saved or discarded.
    pub fn set_pending_diagnosis(&mut self, result: DiagnosisResult, image: String) {
        self.pending_diagnosis = Some(PendingDiagnosis { result, image });
    }

    pub fn take_pending_diagnosis(&mut self) -> Option<PendingDiagnosis> {
        self.pending_diagnosis.take()
    }

    pub fn resolve(&self, session: &Session) -> Screen {
        if matches!(session, Session::Anonymous) {
            return Screen::Login;
        }

        if let Some(pending) = &self.pending_diagnosis {
            return Screen::DiagnosisResult(pending.clone());
        }

        match self.view {
            View::Camera => Screen::Camera,
            View::Expert => Screen::Expert,
            View::Premium => Screen::Premium,
            View::Database => match &self.selected_species {
                Some(id) => Screen::SpeciesDetail(id.clone()),
                None => Screen::SpeciesCatalog,
            },
            View::Dashboard => match &self.selected_plant {
                Some(id) => Screen::PlantDetail(id.clone()),
                None => Screen::Dashboard,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthStatus;

    fn verdict() -> DiagnosisResult {
        DiagnosisResult {
            plant_name: "Aloe Vera".into(),
            scientific_name: "Aloe barbadensis miller".into(),
            confidence: 95.0,
            health_status: HealthStatus::Thriving,
            diagnosis: "Healthy succulent".into(),
            reasoning: "Firm upright leaves".into(),
            care_plan: vec![],
            suggested_water_frequency: 21,
            suggested_mist_frequency: 0,
            suggested_fertilize_frequency: 90,
        }
    }

    #[test]
    fn anonymous_sessions_only_see_login() {
        let mut router = Router::new();
        router.change_view(View::Camera);
        assert_eq!(router.resolve(&Session::Anonymous), Screen::Login);
        assert_eq!(router.resolve(&Session::Guest), Screen::Camera);
    }

    #[test]
    fn pending_diagnosis_overlays_everything() {
        let mut router = Router::new();
        router.change_view(View::Expert);
        router.set_pending_diagnosis(verdict(), "data:image/jpeg;base64,...".into());

        match router.resolve(&Session::Guest) {
            Screen::DiagnosisResult(pending) => {
                assert_eq!(pending.result.plant_name, "Aloe Vera")
            }
            other => panic!("expected diagnosis overlay, got {other:?}"),
        }

        router.take_pending_diagnosis();
        assert_eq!(router.resolve(&Session::Guest), Screen::Expert);
    }

    #[test]
    fn species_detail_wins_inside_the_catalog_tab() {
        let mut router = Router::new();
        router.change_view(View::Database);
        assert_eq!(router.resolve(&Session::Guest), Screen::SpeciesCatalog);

        router.select_species("pothos");
        assert_eq!(
            router.resolve(&Session::Guest),
            Screen::SpeciesDetail("pothos".into())
        );

        router.clear_species();
        assert_eq!(router.resolve(&Session::Guest), Screen::SpeciesCatalog);
    }

    #[test]
    fn selecting_a_plant_opens_its_detail_until_cleared() {
        let mut router = Router::new();
        router.select_plant("p-1");
        assert_eq!(
            router.resolve(&Session::Guest),
            Screen::PlantDetail("p-1".into())
        );

        router.clear_plant();
        assert_eq!(router.resolve(&Session::Guest), Screen::Dashboard);
    }

    #[test]
    fn changing_tabs_drops_selections() {
        let mut router = Router::new();
        router.select_plant("p-1");
        router.change_view(View::Camera);
        router.change_view(View::Dashboard);
        assert_eq!(router.resolve(&Session::Guest), Screen::Dashboard);
    }
}
