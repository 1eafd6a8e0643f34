use crate::cli::commands::{open_store, period_or_default};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::storage;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let settings = storage::load_settings(&store)?;
        let records = storage::load_records(&store)?;

        ExportLogic::export(
            &records,
            &settings,
            *format,
            file,
            period_or_default(*period, cfg)?,
            today,
            *force,
        )?;
    }
    Ok(())
}
