use crate::errors::{AppError, AppResult};
use crate::models::record::RawRecord;
use crate::models::settings::SettingsFile;
use crate::storage::Store;

/// In-memory store, handy for library callers and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub records: Vec<RawRecord>,
    pub settings: Option<SettingsFile>,
    /// When set, every call fails as if the backend were down.
    pub unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> AppResult<()> {
        if self.unavailable {
            return Err(AppError::Storage("memory store marked unavailable".into()));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn get_records(&self) -> AppResult<Vec<RawRecord>> {
        self.check()?;
        Ok(self.records.clone())
    }

    fn save_records(&mut self, records: &[RawRecord]) -> AppResult<()> {
        self.check()?;
        self.records = records.to_vec();
        Ok(())
    }

    fn get_settings(&self) -> AppResult<Option<SettingsFile>> {
        self.check()?;
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, settings: &SettingsFile) -> AppResult<()> {
        self.check()?;
        self.settings = Some(settings.clone());
        Ok(())
    }
}
