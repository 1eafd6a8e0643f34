use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Keys expected in the configuration file but absent from it.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(Config::FIELDS.to_vec());
        }

        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;
        let map = yaml
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

        Ok(Config::FIELDS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(Value::String((*k).to_string())))
            .collect())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }
        Ok(ed)
    }
}
