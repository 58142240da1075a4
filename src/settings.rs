use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct UserSettings {
    /// Whether the user chose the synthetic guest identity. Mirrors the
    /// session across launches so guests keep their garden.
    #[serde(default)]
    guest_mode: bool,
}

/// JSON-backed user settings. Unreadable or corrupt files fall back to
/// defaults rather than blocking startup.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = Self::load(&path)?;
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    fn load(path: &PathBuf) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        Ok(serde_json::from_str(&contents).unwrap_or_default())
    }

    pub fn guest_mode(&self) -> bool {
        self.data.read().unwrap().guest_mode
    }

    pub fn set_guest_mode(&self, enabled: bool) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.guest_mode = enabled;
        self.flush(&guard)
    }

    /// Re-read the file, dropping any in-memory state.
    pub fn reload(&self) -> Result<()> {
        let data = Self::load(&self.path)?;
        *self.data.write().unwrap() = data;
        Ok(())
    }

    fn flush(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_mode_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        assert!(!store.guest_mode());
        store.set_guest_mode(true).unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        assert!(reopened.guest_mode());
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert!(!store.guest_mode());
    }

    #[test]
    fn external_edits_show_up_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        fs::write(&path, r#"{ "guest_mode": true }"#).unwrap();
        store.reload().unwrap();
        assert!(store.guest_mode());
    }
}
