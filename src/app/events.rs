use serde::Serialize;

/// Notifications pushed to the screen layer. Session changes travel on the
/// session store's own watch channel; these cover the plant list.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum AppEvent {
    /// The in-memory plant list changed (optimistic update or reload).
    PlantsChanged,
    /// A background create/save failed and its optimistic insert was
    /// rolled back.
    #[serde(rename_all = "camelCase")]
    PlantSaveFailed { plant_id: String, message: String },
}
