use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AddOutcome};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;

/// Add or replace the record of a day.
pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        time,
        note,
    } = cmd
    {
        let d = date::parse_date_arg(date_arg, today)
            .ok_or_else(|| AppError::InvalidDate(date_arg.to_string()))?;
        let t: ClockTime = time.parse()?;

        let mut store = open_store(cfg)?;

        match AddLogic::apply(&mut store, d, t, note.clone())? {
            AddOutcome::Inserted => success(format!("Recorded {} for {}.", t, d)),
            AddOutcome::Updated => success(format!("Updated {} to {}.", d, t)),
        }
    }

    Ok(())
}
