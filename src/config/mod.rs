use crate::core::report::DASHBOARD_TREND_DAYS;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding offWorkRecords.json and settings.json
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_period")]
    pub default_period: String,
    #[serde(default = "default_compare")]
    pub default_compare: String,
    #[serde(default = "default_trend_days")]
    pub trend_days: i64,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_dir() -> String {
    Config::default_data_dir().to_string_lossy().to_string()
}
fn default_period() -> String {
    "month".to_string()
}
fn default_compare() -> String {
    "previous".to_string()
}
fn default_trend_days() -> i64 {
    DASHBOARD_TREND_DAYS
}
fn default_recent_limit() -> usize {
    10
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_period: default_period(),
            default_compare: default_compare(),
            trend_days: default_trend_days(),
            recent_limit: default_recent_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Keys written to the configuration file.
    pub const FIELDS: [&'static str; 6] = [
        "data_dir",
        "default_period",
        "default_compare",
        "trend_days",
        "recent_limit",
        "log_level",
    ];

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("offwork")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".offwork")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("offwork.conf")
    }

    /// Default directory of the JSON documents
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Data directory with `~/` expanded
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the configuration file and create the data directory.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };

        if let Some(custom) = custom_data_dir {
            let p = expand_tilde(&custom);
            let resolved = if p.is_absolute() { p } else { dir.join(p) };
            config.data_dir = resolved.to_string_lossy().to_string();
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        fs::create_dir_all(config.data_path())?;

        Ok(config)
    }
}
