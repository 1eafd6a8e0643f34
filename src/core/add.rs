use crate::errors::AppResult;
use crate::models::record::{Record, sort_descending};
use crate::storage::{self, Store};
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use tracing::info;

/// Whether `add` created a new day or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Inserted,
    Updated,
}

/// Insert `record`, dropping every record with the same date, then restore
/// the most-recent-first order.
pub fn upsert(records: &mut Vec<Record>, record: Record) -> AddOutcome {
    let before = records.len();
    records.retain(|r| r.date != record.date);
    let outcome = if records.len() == before {
        AddOutcome::Inserted
    } else {
        AddOutcome::Updated
    };

    records.push(record);
    sort_descending(records);
    outcome
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        store: &mut dyn Store,
        date: NaiveDate,
        time: ClockTime,
        note: Option<String>,
    ) -> AppResult<AddOutcome> {
        let mut records = storage::load_records(store)?;
        let outcome = upsert(&mut records, Record::new(date, time, note));
        storage::save_records(store, &records)?;

        info!(%date, %time, ?outcome, "record stored");
        Ok(outcome)
    }
}
