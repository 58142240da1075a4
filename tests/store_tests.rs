use chrono::{DateTime, Duration, TimeZone, Utc};
use tempfile::TempDir;

use verdant::db::{Database, PlantPatch, PlantStore};
use verdant::models::{CareDimension, CareSchedule, HealthStatus, Plant};

fn open_db(dir: &TempDir) -> Database {
    Database::new(dir.path().join("verdant.sqlite3")).expect("database should open")
}

fn schedule(anchor: DateTime<Utc>) -> CareSchedule {
    CareSchedule {
        water: CareDimension::active(7, anchor),
        mist: CareDimension::Inactive,
        fertilize: CareDimension::active(30, anchor),
    }
}

fn plant(id: &str, owner: &str, created_at: DateTime<Utc>) -> Plant {
    Plant {
        id: id.to_string(),
        owner_id: owner.to_string(),
        name: format!("Plant {id}"),
        species: "Monstera deliciosa".to_string(),
        image_ref: None,
        acquired_at: created_at,
        status: HealthStatus::Thriving,
        schedule: schedule(created_at),
        diagnosis_history: Vec::new(),
        created_at,
        updated_at: created_at,
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn insert_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    let stored = plant("p-1", "guest", t0());
    db.insert_plant(&stored).await.unwrap();

    let loaded = db.get_plant("p-1").await.unwrap().expect("plant exists");
    assert_eq!(loaded, stored);
    assert!(db.get_plant("p-missing").await.unwrap().is_none());
}

#[tokio::test]
async fn list_orders_newest_first_and_scopes_by_owner() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.insert_plant(&plant("old", "guest", t0())).await.unwrap();
    db.insert_plant(&plant("new", "guest", t0() + Duration::days(2)))
        .await
        .unwrap();
    db.insert_plant(&plant("other", "u-99", t0() + Duration::days(1)))
        .await
        .unwrap();

    let mine = db.list_plants("guest").await.unwrap();
    let ids: Vec<_> = mine.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old"]);

    let theirs = db.list_plants("u-99").await.unwrap();
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].id, "other");
}

#[tokio::test]
async fn patch_touches_only_the_given_fields() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    let original = plant("p-1", "guest", t0());
    db.insert_plant(&original).await.unwrap();

    let edit_time = t0() + Duration::days(3);
    let new_schedule = CareSchedule {
        water: CareDimension::active(14, edit_time),
        ..original.schedule.clone()
    };
    db.update_plant("p-1", &PlantPatch::schedule(new_schedule.clone()), edit_time)
        .await
        .unwrap();

    let loaded = db.get_plant("p-1").await.unwrap().unwrap();
    assert_eq!(loaded.schedule, new_schedule);
    assert_eq!(loaded.name, original.name);
    assert_eq!(loaded.status, original.status);
    assert_eq!(loaded.updated_at, edit_time);
    assert_eq!(loaded.created_at, original.created_at);
}

#[tokio::test]
async fn patching_a_missing_plant_fails() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    let err = db
        .update_plant("nope", &PlantPatch::default(), t0())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no plant"));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.insert_plant(&plant("p-1", "guest", t0())).await.unwrap();
    db.delete_plant("p-1").await.unwrap();
    assert!(db.get_plant("p-1").await.unwrap().is_none());
}

#[tokio::test]
async fn reopening_the_database_keeps_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("verdant.sqlite3");

    {
        let db = Database::new(path.clone()).unwrap();
        db.insert_plant(&plant("p-1", "guest", t0())).await.unwrap();
    }

    let reopened = Database::new(path).unwrap();
    let plants = reopened.list_for_owner("guest").await.unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].id, "p-1");
}
