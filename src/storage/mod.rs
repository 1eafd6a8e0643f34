//! Persistence of the two user documents: the record list and the settings.

pub mod json_store;
pub mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::record::{RawRecord, Record, validate_batch};
use crate::models::settings::{Settings, SettingsFile};
use tracing::{debug, warn};

pub const RECORDS_FILE: &str = "offWorkRecords.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Storage collaborator. Every call may fail with `AppError::Storage`.
pub trait Store {
    fn get_records(&self) -> AppResult<Vec<RawRecord>>;
    fn save_records(&mut self, records: &[RawRecord]) -> AppResult<()>;
    /// `None` when no settings were ever saved.
    fn get_settings(&self) -> AppResult<Option<SettingsFile>>;
    fn save_settings(&mut self, settings: &SettingsFile) -> AppResult<()>;
}

/// Fetch and validate the record list.
pub fn load_records(store: &dyn Store) -> AppResult<Vec<Record>> {
    let raw = store.get_records()?;
    let records =
        validate_batch(&raw).inspect_err(|e| warn!(error = %e, "record batch rejected"))?;
    debug!(count = records.len(), "records loaded");
    Ok(records)
}

pub fn save_records(store: &mut dyn Store, records: &[Record]) -> AppResult<()> {
    let raw: Vec<RawRecord> = records.iter().map(RawRecord::from).collect();
    store.save_records(&raw)?;
    debug!(count = raw.len(), "records saved");
    Ok(())
}

/// Current settings; missing documents and missing fields fall back to defaults.
pub fn load_settings(store: &dyn Store) -> AppResult<Settings> {
    match store.get_settings()? {
        Some(file) => file.into_settings(),
        None => Ok(Settings::default()),
    }
}

/// Load settings, writing the defaults first when none exist yet.
pub fn load_or_init_settings(store: &mut dyn Store) -> AppResult<Settings> {
    match store.get_settings()? {
        Some(file) if !file.is_empty() => file.into_settings(),
        _ => {
            let defaults = Settings::default();
            store.save_settings(&SettingsFile::from(&defaults))?;
            debug!("default settings created");
            Ok(defaults)
        }
    }
}

/// Replace the stored settings with `settings`.
pub fn save_settings(store: &mut dyn Store, settings: &Settings) -> AppResult<()> {
    store.save_settings(&SettingsFile::from(settings))?;
    debug!(target_time = %settings.target_time, "settings saved");
    Ok(())
}
