use crate::errors::{AppError, AppResult};
use crate::utils::time::ClockTime;
use serde::{Deserialize, Serialize};

/// Monday-first workday flags: Mon–Fri on, Sat/Sun off.
pub const DEFAULT_WORKDAYS: [bool; 7] = [true, true, true, true, true, false, false];

pub const WORKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// User settings, stored as a single document and always replaced whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub target_time: ClockTime,
    pub workdays: [bool; 7],
    pub data_retention: String,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_time: default_target_time(),
            workdays: DEFAULT_WORKDAYS,
            data_retention: "365".to_string(),
            theme: "light".to_string(),
        }
    }
}

fn default_target_time() -> ClockTime {
    ClockTime::from_hm(18, 0).unwrap_or(ClockTime::MIDNIGHT)
}

impl Settings {
    /// Parse a "1111100"-style mask (Monday first) into workday flags.
    pub fn parse_workdays(mask: &str) -> AppResult<[bool; 7]> {
        let chars: Vec<char> = mask.trim().chars().collect();
        if chars.len() != 7 {
            return Err(AppError::Config(format!(
                "workdays mask must have 7 digits (Monday first), got '{mask}'"
            )));
        }

        let mut out = [false; 7];
        for (i, c) in chars.iter().enumerate() {
            out[i] = match c {
                '1' => true,
                '0' => false,
                other => {
                    return Err(AppError::Config(format!(
                        "invalid workdays flag '{other}' in '{mask}'"
                    )));
                }
            };
        }
        Ok(out)
    }

    pub fn workdays_mask(&self) -> String {
        self.workdays
            .iter()
            .map(|w| if *w { '1' } else { '0' })
            .collect()
    }
}

/// Settings document as stored; every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    #[serde(default)]
    pub target_time: Option<String>,
    #[serde(default)]
    pub workdays: Option<Vec<bool>>,
    #[serde(default)]
    pub data_retention: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}

impl SettingsFile {
    /// True when the stored object carries no recognised field at all.
    pub fn is_empty(&self) -> bool {
        self.target_time.is_none()
            && self.workdays.is_none()
            && self.data_retention.is_none()
            && self.theme.is_none()
    }

    /// Fill missing fields with defaults. A present but malformed target time
    /// is a data error and is reported, not replaced.
    pub fn into_settings(self) -> AppResult<Settings> {
        let defaults = Settings::default();

        let target_time = match self.target_time.as_deref() {
            None | Some("") => defaults.target_time,
            Some(t) => t.parse::<ClockTime>()?,
        };

        // a missing index counts as a workday
        let workdays = match self.workdays {
            None => defaults.workdays,
            Some(flags) => {
                let mut out = [true; 7];
                for (slot, flag) in out.iter_mut().zip(flags) {
                    *slot = flag;
                }
                out
            }
        };

        Ok(Settings {
            target_time,
            workdays,
            data_retention: self.data_retention.unwrap_or(defaults.data_retention),
            theme: self.theme.unwrap_or(defaults.theme),
        })
    }
}

impl From<&Settings> for SettingsFile {
    fn from(s: &Settings) -> Self {
        Self {
            target_time: Some(s.target_time.to_string()),
            workdays: Some(s.workdays.to_vec()),
            data_retention: Some(s.data_retention.clone()),
            theme: Some(s.theme.clone()),
        }
    }
}
