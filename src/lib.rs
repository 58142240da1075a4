pub mod app;
pub mod auth;
pub mod care;
pub mod catalog;
pub mod db;
pub mod diagnosis;
pub mod models;
pub mod settings;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use app::GardenController;
use auth::{Session, SessionStore};
use db::Database;
use diagnosis::RemoteDiagnosisClient;
use settings::SettingsStore;

/// Wires the stores, the session and the controller together for the screen
/// layer. One instance per running app.
pub struct App {
    pub db: Database,
    pub garden: GardenController,
    pub session: Arc<SessionStore>,
    pub settings: SettingsStore,
}

impl App {
    /// Initialize logging (reads RUST_LOG env var). Call once, before
    /// [`App::new`].
    pub fn init_logging() {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        info!("Verdant starting up...");

        let database = Database::new(data_dir.join("verdant.sqlite3"))?;
        let settings = SettingsStore::new(data_dir.join("settings.json"))?;

        // Guests keep their garden across launches.
        let initial = if settings.guest_mode() {
            Session::Guest
        } else {
            Session::Anonymous
        };
        let session = Arc::new(SessionStore::new(initial));

        let garden = GardenController::new(
            Arc::new(database.clone()),
            Arc::new(RemoteDiagnosisClient::from_env()),
            session.clone(),
        );

        Ok(Self {
            db: database,
            garden,
            session,
            settings,
        })
    }

    pub fn sign_in_as_guest(&self) -> Result<()> {
        self.settings.set_guest_mode(true)?;
        self.session.sign_in_as_guest();
        Ok(())
    }

    /// Adopt a session pushed by the hosted auth provider.
    pub fn session_changed(&self, session: Session) -> Result<()> {
        if !session.is_guest() {
            self.settings.set_guest_mode(false)?;
        }
        self.session.set(session);
        Ok(())
    }

    pub fn sign_out(&self) -> Result<()> {
        self.settings.set_guest_mode(false)?;
        self.session.sign_out();
        Ok(())
    }
}
