// src/export/model.rs

use crate::models::record::Record;
use crate::models::settings::Settings;
use serde::Serialize;

/// Flat row for the CSV export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    pub date: String,
    pub time: String,
    pub note: String,
}

impl From<&Record> for ExportRow {
    fn from(r: &Record) -> Self {
        Self {
            date: r.date_str(),
            time: r.time_str(),
            note: r.note.clone().unwrap_or_default(),
        }
    }
}

/// Header for the CSV export.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "time", "note"]
}

/// Full backup document: every record plus the settings.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    pub records: Vec<Record>,
    pub settings: Settings,
    pub export_date: String,
}
