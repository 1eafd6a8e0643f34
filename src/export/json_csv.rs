// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportRow, FullExport, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render rows as CSV text. Fields containing a comma, a quote or a newline
/// are quoted and inner quotes are doubled.
pub fn csv_string(rows: &[ExportRow]) -> AppResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    wtr.write_record(get_headers())?;
    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Export the period rows as CSV.
pub(crate) fn export_csv(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let content = csv_string(rows)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export the full document as pretty-printed JSON.
pub(crate) fn export_json(doc: &FullExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
