use serde::Serialize;

/// Free-text care requirements shown on the species detail screen.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRequirements {
    pub water: &'static str,
    pub light: &'static str,
    pub temperature: &'static str,
    pub humidity: &'static str,
}

/// Read-only catalog entry, used as a template to seed a new plant and its
/// care schedule.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: &'static str,
    pub common_name: &'static str,
    pub scientific_name: &'static str,
    pub image_url: &'static str,
    pub description: &'static str,
    pub care: CareRequirements,
    pub common_issues: &'static [&'static str],
    /// Suggested watering interval in days; every catalog entry has one.
    pub suggested_water_frequency: u32,
    /// Suggested misting interval in days, 0 for species that skip it.
    pub suggested_mist_frequency: u32,
    /// Suggested fertilizing interval in days, 0 for species that skip it.
    pub suggested_fertilize_frequency: u32,
}
