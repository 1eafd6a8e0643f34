pub mod add;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod settings;
pub mod stats;

use crate::config::Config;
use crate::core::calculator::period::PeriodKind;
use crate::errors::AppResult;
use crate::storage::JsonStore;

/// Open the JSON documents of the configured data directory.
pub(crate) fn open_store(cfg: &Config) -> AppResult<JsonStore> {
    JsonStore::open(cfg.data_path())
}

/// Period given on the command line, else the configured default.
pub(crate) fn period_or_default(period: Option<PeriodKind>, cfg: &Config) -> AppResult<PeriodKind> {
    match period {
        Some(p) => Ok(p),
        None => cfg.default_period.parse(),
    }
}
