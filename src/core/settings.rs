use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::storage::{self, Store};
use crate::utils::time::ClockTime;
use tracing::info;

/// Fields the user asked to change; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub target_time: Option<ClockTime>,
    pub workdays: Option<[bool; 7]>,
    pub data_retention: Option<String>,
    pub theme: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.target_time.is_none()
            && self.workdays.is_none()
            && self.data_retention.is_none()
            && self.theme.is_none()
    }

    pub fn apply_to(self, mut settings: Settings) -> Settings {
        if let Some(t) = self.target_time {
            settings.target_time = t;
        }
        if let Some(w) = self.workdays {
            settings.workdays = w;
        }
        if let Some(r) = self.data_retention {
            settings.data_retention = r;
        }
        if let Some(t) = self.theme {
            settings.theme = t;
        }
        settings
    }
}

pub struct SettingsLogic;

impl SettingsLogic {
    /// Merge `update` into the stored settings and save the whole document.
    pub fn update(store: &mut dyn Store, update: SettingsUpdate) -> AppResult<Settings> {
        let current = storage::load_or_init_settings(store)?;
        let next = update.apply_to(current);
        storage::save_settings(store, &next)?;

        info!(target_time = %next.target_time, workdays = %next.workdays_mask(), "settings updated");
        Ok(next)
    }
}
