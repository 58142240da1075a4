use std::{
    path::{Path, PathBuf},
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use tokio::sync::oneshot;

mod migrations;
mod store;

pub use store::{PlantPatch, PlantStore};

use crate::models::{CareSchedule, DiagnosisResult, HealthStatus, Plant};
use migrations::run_migrations;

type StoreTask = Box<dyn FnOnce(&mut Connection) + Send + 'static>;

enum WorkerMessage {
    Run(StoreTask),
    Shutdown,
}

struct DatabaseInner {
    sender: mpsc::Sender<WorkerMessage>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        let mut guard = match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(handle) = guard.take() {
            if let Err(err) = self.sender.send(WorkerMessage::Shutdown) {
                error!("Failed to send shutdown to DB thread: {err}");
            }
            if let Err(join_err) = handle.join() {
                error!("Failed to join DB thread: {join_err:?}");
            }
        }
    }
}

/// Open the SQLite file and bring it up to the current schema. Runs on the
/// worker thread before it accepts any task.
fn open_connection(path: &Path) -> Result<Connection> {
    let mut conn = Connection::open(path).context("failed to open SQLite database")?;

    if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
        error!("Failed to enable WAL mode: {err}");
    }
    if let Err(err) = conn.pragma_update(None, "foreign_keys", "ON") {
        error!("Failed to enable foreign keys: {err}");
    }

    run_migrations(&mut conn).context("failed to run database migrations")?;
    Ok(conn)
}

fn worker_main(
    path: PathBuf,
    ready_tx: mpsc::Sender<Result<()>>,
    inbox: mpsc::Receiver<WorkerMessage>,
) {
    let mut conn = match open_connection(&path) {
        Ok(conn) => {
            if ready_tx.send(Ok(())).is_err() {
                error!("DB initialization receiver dropped before ready signal");
                return;
            }
            conn
        }
        Err(err) => {
            let _ = ready_tx.send(Err(err));
            return;
        }
    };

    while let Ok(message) = inbox.recv() {
        match message {
            WorkerMessage::Run(task) => task(&mut conn),
            WorkerMessage::Shutdown => break,
        }
    }

    info!("Database thread shutting down");
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| anyhow!("invalid datetime '{value}': {err}"))
}

fn status_from_str(value: &str) -> Result<HealthStatus> {
    match value {
        "Thriving" => Ok(HealthStatus::Thriving),
        "Recovering" => Ok(HealthStatus::Recovering),
        "Critical" => Ok(HealthStatus::Critical),
        _ => Err(anyhow!("unknown health status '{value}'")),
    }
}

fn schedule_to_json(schedule: &CareSchedule) -> Result<String> {
    serde_json::to_string(schedule).context("failed to serialize care schedule")
}

fn history_to_json(history: &[DiagnosisResult]) -> Result<String> {
    serde_json::to_string(history).context("failed to serialize diagnosis history")
}

fn plant_from_row(row: &rusqlite::Row<'_>) -> Result<Plant> {
    let schedule: CareSchedule = serde_json::from_str(&row.get::<_, String>(7)?)
        .context("invalid care schedule column")?;
    let diagnosis_history: Vec<DiagnosisResult> = serde_json::from_str(&row.get::<_, String>(8)?)
        .context("invalid diagnosis history column")?;

    Ok(Plant {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        species: row.get(3)?,
        image_ref: row.get::<_, Option<String>>(4)?,
        acquired_at: parse_datetime(&row.get::<_, String>(5)?)?,
        status: status_from_str(&row.get::<_, String>(6)?)?,
        schedule,
        diagnosis_history,
        created_at: parse_datetime(&row.get::<_, String>(9)?)?,
        updated_at: parse_datetime(&row.get::<_, String>(10)?)?,
    })
}

const PLANT_COLUMNS: &str = "id, owner_id, name, species, image_ref, acquired_at, status, \
                             schedule, diagnosis_history, created_at, updated_at";

/// Handle to the plant database. All access is serialized through one worker
/// thread that owns the SQLite connection; callers await replies over oneshot
/// channels.
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
    db_path: Arc<PathBuf>,
}

impl Database {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let (command_tx, command_rx) = mpsc::channel::<WorkerMessage>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let path_for_thread = db_path.clone();

        let worker = thread::Builder::new()
            .name("verdant-db".into())
            .spawn(move || worker_main(path_for_thread, ready_tx, command_rx))
            .with_context(|| "failed to spawn database worker thread")?;

        ready_rx
            .recv()
            .context("database worker exited before signaling readiness")??;

        info!("Database initialized at {}", db_path.as_path().display());

        Ok(Self {
            inner: Arc::new(DatabaseInner {
                sender: command_tx,
                worker: Mutex::new(Some(worker)),
            }),
            db_path: Arc::new(db_path),
        })
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    pub async fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let message = WorkerMessage::Run(Box::new(move |conn| {
            if reply_tx.send(task(conn)).is_err() {
                error!("DB caller dropped before receiving result");
            }
        }));

        self.inner
            .sender
            .send(message)
            .map_err(|err| anyhow!("failed to send task to DB thread: {err}"))?;

        reply_rx
            .await
            .map_err(|_| anyhow!("database thread terminated unexpectedly"))?
    }

    pub async fn insert_plant(&self, plant: &Plant) -> Result<()> {
        let record = plant.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO plants (id, owner_id, name, species, image_ref, acquired_at, status, schedule, diagnosis_history, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    record.id,
                    record.owner_id,
                    record.name,
                    record.species,
                    record.image_ref,
                    record.acquired_at.to_rfc3339(),
                    record.status.as_str(),
                    schedule_to_json(&record.schedule)?,
                    history_to_json(&record.diagnosis_history)?,
                    record.created_at.to_rfc3339(),
                    record.updated_at.to_rfc3339(),
                ],
            )
            .with_context(|| "failed to insert plant")?;
            Ok(())
        })
        .await
    }

    /// Partial update: only the fields present in the patch change. The row
    /// always gets a fresh `updated_at`.
    pub async fn update_plant(
        &self,
        plant_id: &str,
        patch: &PlantPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        let plant_id = plant_id.to_string();
        let name = patch.name.clone();
        let status = patch.status.map(|s| s.as_str().to_string());
        let schedule = patch.schedule.as_ref().map(schedule_to_json).transpose()?;
        let diagnosis_history = patch
            .diagnosis_history
            .as_deref()
            .map(history_to_json)
            .transpose()?;

        self.execute(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE plants
                     SET name = COALESCE(?2, name),
                         status = COALESCE(?3, status),
                         schedule = COALESCE(?4, schedule),
                         diagnosis_history = COALESCE(?5, diagnosis_history),
                         updated_at = ?6
                     WHERE id = ?1",
                    params![
                        plant_id,
                        name,
                        status,
                        schedule,
                        diagnosis_history,
                        updated_at.to_rfc3339(),
                    ],
                )
                .with_context(|| "failed to update plant")?;
            if changed == 0 {
                return Err(anyhow!("no plant with id {plant_id}"));
            }
            Ok(())
        })
        .await
    }

    pub async fn delete_plant(&self, plant_id: &str) -> Result<()> {
        let plant_id = plant_id.to_string();
        self.execute(move |conn| {
            conn.execute("DELETE FROM plants WHERE id = ?1", params![plant_id])
                .with_context(|| "failed to delete plant")?;
            Ok(())
        })
        .await
    }

    pub async fn get_plant(&self, plant_id: &str) -> Result<Option<Plant>> {
        let plant_id = plant_id.to_string();
        self.execute(move |conn| {
            let mut stmt =
                conn.prepare(&format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"))?;
            let row = stmt
                .query_row(params![plant_id], |row| Ok(plant_from_row(row)))
                .optional()?;
            row.transpose()
        })
        .await
    }

    /// All plants for one owner, newest first (the dashboard order).
    pub async fn list_plants(&self, owner_id: &str) -> Result<Vec<Plant>> {
        let owner_id = owner_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {PLANT_COLUMNS} FROM plants
                 WHERE owner_id = ?1
                 ORDER BY created_at DESC"
            ))?;

            let mut rows = stmt.query(params![owner_id])?;
            let mut plants = Vec::new();
            while let Some(row) = rows.next()? {
                plants.push(plant_from_row(row)?);
            }
            Ok(plants)
        })
        .await
    }
}

#[async_trait]
impl PlantStore for Database {
    async fn insert(&self, plant: &Plant) -> Result<()> {
        self.insert_plant(plant).await
    }

    async fn update(
        &self,
        plant_id: &str,
        patch: &PlantPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        self.update_plant(plant_id, patch, updated_at).await
    }

    async fn delete(&self, plant_id: &str) -> Result<()> {
        self.delete_plant(plant_id).await
    }

    async fn get(&self, plant_id: &str) -> Result<Option<Plant>> {
        self.get_plant(plant_id).await
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Plant>> {
        self.list_plants(owner_id).await
    }
}
