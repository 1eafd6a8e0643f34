mod common;
use common::{d, t};
use offwork::core::add::{AddLogic, AddOutcome, upsert};
use offwork::core::del::DeleteLogic;
use offwork::core::settings::{SettingsLogic, SettingsUpdate};
use offwork::errors::AppError;
use offwork::models::record::{RawRecord, Record};
use offwork::models::settings::{Settings, SettingsFile};
use offwork::storage::{self, JsonStore, MemoryStore, Store};
use std::fs;
use tempfile::TempDir;

fn raw(date: &str, time: &str) -> RawRecord {
    RawRecord {
        date: date.to_string(),
        time: time.to_string(),
        note: None,
    }
}

#[test]
fn json_store_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::open(dir.path().join("nested")).unwrap();

    assert!(store.get_records().unwrap().is_empty());
    assert!(store.get_settings().unwrap().is_none());
    assert!(store.dir().exists());
}

#[test]
fn json_store_persists_both_documents() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonStore::open(dir.path()).unwrap();

    AddLogic::apply(&mut store, d("2024-06-03"), t("18:30"), None).unwrap();
    AddLogic::apply(&mut store, d("2024-06-10"), t("17:45"), Some("gym".into())).unwrap();
    storage::load_or_init_settings(&mut store).unwrap();

    let reopened = JsonStore::new(dir.path());
    let records = storage::load_records(&reopened).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, d("2024-06-10"));
    assert_eq!(records[0].note.as_deref(), Some("gym"));

    let text = fs::read_to_string(reopened.records_path()).unwrap();
    assert!(text.contains("\"time\": \"18:30\""));

    let settings = fs::read_to_string(reopened.settings_path()).unwrap();
    assert!(settings.contains("\"targetTime\": \"18:00\""));
    assert!(settings.contains("\"dataRetention\""));

    // no temp file left behind
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn corrupt_records_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::open(dir.path()).unwrap();
    fs::write(store.records_path(), "{ not json").unwrap();

    assert!(matches!(store.get_records(), Err(AppError::Storage(_))));
}

#[test]
fn invalid_record_rejects_the_batch() {
    let store = MemoryStore::with_records(vec![raw("2024-06-03", "18:30"), raw("2024-06-04", "25:00")]);

    match storage::load_records(&store) {
        Err(AppError::InvalidRecord { date, .. }) => assert_eq!(date, "2024-06-04"),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn add_replaces_same_date_and_keeps_descending_order() {
    let mut store = MemoryStore::new();

    assert_eq!(
        AddLogic::apply(&mut store, d("2024-06-03"), t("18:30"), None).unwrap(),
        AddOutcome::Inserted
    );
    AddLogic::apply(&mut store, d("2024-06-10"), t("17:45"), None).unwrap();
    AddLogic::apply(&mut store, d("2024-06-05"), t("18:05"), None).unwrap();
    assert_eq!(
        AddLogic::apply(&mut store, d("2024-06-03"), t("17:00"), Some(String::new())).unwrap(),
        AddOutcome::Updated
    );

    let dates: Vec<_> = store.records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-06-10", "2024-06-05", "2024-06-03"]);
    assert_eq!(store.records[2].time, "17:00");
    assert_eq!(store.records[2].note, None);
}

#[test]
fn delete_removes_or_reports_missing() {
    let mut store = MemoryStore::with_records(vec![raw("2024-06-03", "18:30")]);

    let removed = DeleteLogic::apply(&mut store, d("2024-06-03")).unwrap();
    assert_eq!(removed.time, t("18:30"));
    assert!(store.records.is_empty());

    assert!(matches!(
        DeleteLogic::apply(&mut store, d("2024-06-03")),
        Err(AppError::NoRecordForDate(_))
    ));
}

#[test]
fn unavailable_store_surfaces_storage_error() {
    let mut store = MemoryStore::unavailable();

    assert!(matches!(storage::load_records(&store), Err(AppError::Storage(_))));
    assert!(matches!(
        AddLogic::apply(&mut store, d("2024-06-03"), t("18:30"), None),
        Err(AppError::Storage(_))
    ));
}

#[test]
fn missing_settings_fields_fall_back_to_defaults() {
    let file: SettingsFile =
        serde_json::from_str(r#"{"theme":"dark","workdays":[true,false],"extra":1}"#).unwrap();
    let settings = file.into_settings().unwrap();

    assert_eq!(settings.target_time, t("18:00"));
    assert_eq!(settings.theme, "dark");
    assert_eq!(settings.workdays, [true, false, true, true, true, true, true]);
    assert_eq!(settings.data_retention, Settings::default().data_retention);
}

#[test]
fn malformed_target_time_is_reported() {
    let file: SettingsFile = serde_json::from_str(r#"{"targetTime":"6pm"}"#).unwrap();
    assert!(file.into_settings().is_err());
}

#[test]
fn settings_update_merges_fields() {
    let mut store = MemoryStore::new();

    let saved = SettingsLogic::update(
        &mut store,
        SettingsUpdate {
            target_time: Some(t("17:30")),
            workdays: Some(Settings::parse_workdays("1111110").unwrap()),
            ..SettingsUpdate::default()
        },
    )
    .unwrap();

    assert_eq!(saved.target_time, t("17:30"));
    assert_eq!(saved.workdays_mask(), "1111110");
    assert_eq!(saved.theme, "light");

    let reloaded = storage::load_settings(&store).unwrap();
    assert_eq!(reloaded.target_time, t("17:30"));
}

#[test]
fn workdays_mask_is_validated() {
    assert!(Settings::parse_workdays("11111").is_err());
    assert!(Settings::parse_workdays("11111x0").is_err());
    assert_eq!(
        Settings::parse_workdays("0000011").unwrap(),
        [false, false, false, false, false, true, true]
    );
}

#[test]
fn repeated_date_rejects_the_batch() {
    let store = MemoryStore::with_records(vec![
        raw("2024-06-10", "18:30"),
        raw("2024-06-03", "18:00"),
        raw("2024-06-10", "19:30"),
    ]);

    match storage::load_records(&store) {
        Err(AppError::InvalidRecord { date, reason }) => {
            assert_eq!(date, "2024-06-10");
            assert_eq!(reason, "duplicate date");
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn upsert_drops_every_entry_of_the_date() {
    let mut records = vec![
        Record::new(d("2024-06-10"), t("18:30"), None),
        Record::new(d("2024-06-03"), t("18:00"), None),
        Record::new(d("2024-06-10"), t("19:30"), None),
    ];

    let outcome = upsert(&mut records, Record::new(d("2024-06-10"), t("17:00"), None));

    assert_eq!(outcome, AddOutcome::Updated);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, d("2024-06-10"));
    assert_eq!(records[0].time, t("17:00"));
    assert_eq!(records[1].date, d("2024-06-03"));
}

#[test]
fn failed_save_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonStore::open(dir.path()).unwrap();

    // a non-empty directory where the records document should be
    fs::create_dir_all(store.records_path().join("blocker")).unwrap();

    let result = storage::save_records(&mut store, &[Record::new(d("2024-06-10"), t("18:00"), None)]);
    assert!(matches!(result, Err(AppError::Storage(_))));

    assert!(!store.records_path().with_extension("json.tmp").exists());
}
