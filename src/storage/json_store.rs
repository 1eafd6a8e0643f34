use crate::errors::{AppError, AppResult};
use crate::models::record::RawRecord;
use crate::models::settings::SettingsFile;
use crate::storage::{RECORDS_FILE, SETTINGS_FILE, Store};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat JSON files inside one data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Open the store, creating the data directory when missing.
    pub fn open<P: AsRef<Path>>(dir: P) -> AppResult<Self> {
        let store = Self::new(dir);
        fs::create_dir_all(&store.dir).map_err(|e| {
            AppError::Storage(format!("cannot create {}: {e}", store.dir.display()))
        })?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Storage(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content).map_err(|e| {
            AppError::Storage(format!("{} is not valid JSON: {e}", path.display()))
        })?;
        Ok(Some(value))
    }

    /// Write through a sibling temp file and rename it into place.
    fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, json).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AppError::Storage(format!("cannot write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            AppError::Storage(format!("cannot replace {}: {e}", path.display()))
        })?;

        debug!(file = %path.display(), "document written");
        Ok(())
    }
}

impl Store for JsonStore {
    fn get_records(&self) -> AppResult<Vec<RawRecord>> {
        Ok(Self::read_json(&self.records_path())?.unwrap_or_default())
    }

    fn save_records(&mut self, records: &[RawRecord]) -> AppResult<()> {
        Self::write_json(&self.records_path(), records)
    }

    fn get_settings(&self) -> AppResult<Option<SettingsFile>> {
        Self::read_json(&self.settings_path())
    }

    fn save_settings(&mut self, settings: &SettingsFile) -> AppResult<()> {
        Self::write_json(&self.settings_path(), settings)
    }
}
