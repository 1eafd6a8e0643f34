// src/export/logic.rs

use crate::core::calculator::period::PeriodKind;
use crate::core::report::{export_rows, full_export};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::record::Record;
use crate::models::settings::Settings;
use crate::ui::messages::warning;
use chrono::{NaiveDate, Utc};
use std::path::Path;
use tracing::info;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a snapshot of the records.
    ///
    /// - `Csv`: rows of `period` ordered by date (oldest first)
    /// - `Json`: every record plus settings and the export timestamp
    ///
    /// Returns the number of records written.
    pub fn export(
        records: &[Record],
        settings: &Settings,
        format: ExportFormat,
        file: &str,
        period: PeriodKind,
        today: NaiveDate,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        match format {
            ExportFormat::Csv => {
                let rows = export_rows(records, period, today);
                if rows.is_empty() {
                    warning(format!("No records found for period '{period}'."));
                    return Ok(0);
                }

                ensure_writable(path, force)?;
                export_csv(&rows, path)?;
                info!(rows = rows.len(), file = %path.display(), "csv export written");
                Ok(rows.len())
            }
            ExportFormat::Json => {
                if records.is_empty() {
                    warning("No records to export.");
                    return Ok(0);
                }

                ensure_writable(path, force)?;
                let doc = full_export(records, settings, Utc::now());
                export_json(&doc, path)?;
                info!(rows = doc.records.len(), file = %path.display(), "json export written");
                Ok(doc.records.len())
            }
        }
    }
}
