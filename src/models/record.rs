use crate::errors::{AppError, AppResult};
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One departure per calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key, stored as "YYYY-MM-DD".
    pub date: NaiveDate,
    /// Stored as zero-padded "HH:MM".
    pub time: ClockTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Record {
    pub fn new(date: NaiveDate, time: ClockTime, note: Option<String>) -> Self {
        // an empty note is the same as no note
        let note = note.filter(|n| !n.trim().is_empty());
        Self { date, time, note }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.to_string()
    }

    pub fn note_or_dash(&self) -> &str {
        self.note.as_deref().unwrap_or("-")
    }
}

/// Record exactly as found in the records document, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl RawRecord {
    pub fn validate(&self) -> AppResult<Record> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").map_err(|_| {
            AppError::InvalidRecord {
                date: self.date.clone(),
                reason: format!("invalid date '{}'", self.date),
            }
        })?;

        let time: ClockTime = self.time.parse().map_err(|_| AppError::InvalidRecord {
            date: self.date.clone(),
            reason: format!("invalid time '{}'", self.time),
        })?;

        Ok(Record::new(date, time, self.note.clone()))
    }
}

impl From<&Record> for RawRecord {
    fn from(r: &Record) -> Self {
        Self {
            date: r.date_str(),
            time: r.time_str(),
            note: r.note.clone(),
        }
    }
}

/// Validate every entry of a batch; the first bad entry rejects the batch.
/// A date seen twice is a bad entry too.
pub fn validate_batch(raw: &[RawRecord]) -> AppResult<Vec<Record>> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());

    for entry in raw {
        let record = entry.validate()?;
        if !seen.insert(record.date) {
            return Err(AppError::InvalidRecord {
                date: entry.date.clone(),
                reason: "duplicate date".to_string(),
            });
        }
        records.push(record);
    }

    Ok(records)
}

/// Sort most recent first (the stored and displayed order).
pub fn sort_descending(records: &mut [Record]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Sort oldest first (trend and export order).
pub fn sort_ascending(records: &mut [Record]) {
    records.sort_by(|a, b| a.date.cmp(&b.date));
}
