use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Add every key missing from the YAML file at `path`, taking values from
/// the defaults. Existing keys are never touched.
///
/// Returns:
///   Ok(added keys) → possibly empty when the file was already complete
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let mut yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(&content)?
    };

    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

    let defaults = serde_yaml::to_value(Config::default())?;
    let Some(defaults) = defaults.as_mapping() else {
        return Err(AppError::Config("default configuration is not a mapping".into()));
    };

    let mut added = Vec::new();
    for (key, value) in defaults {
        if !map.contains_key(key) {
            map.insert(key.clone(), value.clone());
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&yaml)?)?;
    }

    Ok(added)
}
