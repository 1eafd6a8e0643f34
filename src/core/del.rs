use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::storage::{self, Store};
use chrono::NaiveDate;
use tracing::info;

/// Drop the record for `date`; returns whether one existed.
pub fn remove(records: &mut Vec<Record>, date: NaiveDate) -> bool {
    let before = records.len();
    records.retain(|r| r.date != date);
    records.len() != before
}

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &mut dyn Store, date: NaiveDate) -> AppResult<Record> {
        let mut records = storage::load_records(store)?;

        let removed = records
            .iter()
            .find(|r| r.date == date)
            .cloned()
            .ok_or_else(|| AppError::NoRecordForDate(date.format("%Y-%m-%d").to_string()))?;

        remove(&mut records, date);
        storage::save_records(store, &records)?;

        info!(%date, "record deleted");
        Ok(removed)
    }
}
