use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::period::PeriodWindow;
use crate::core::report::filter_by_period;
use crate::errors::AppResult;
use crate::models::record::sort_descending;
use crate::storage;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_departure, colorize_optional, paint};
use crate::utils::date::weekday_str;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::List { limit, period } = cmd {
        let store = open_store(cfg)?;
        let settings = storage::load_settings(&store)?;
        let all = storage::load_records(&store)?;

        let mut records = match period {
            Some(p) => filter_by_period(&all, &PeriodWindow::resolve(*p, today)),
            None => all,
        };
        sort_descending(&mut records);
        records.truncate(limit.unwrap_or(cfg.recent_limit));

        if records.is_empty() {
            info("No records found.");
            return Ok(());
        }

        header(format!("Records (target {})", settings.target_time));

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Day", 3),
            Column::new("Time", 5),
            Column::new("Note", 30),
        ]);
        for r in &records {
            table.add_row(vec![
                r.date_str(),
                weekday_str(r.date).to_string(),
                paint(color_for_departure(r.time > settings.target_time), &r.time_str()),
                colorize_optional(r.note_or_dash()),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
