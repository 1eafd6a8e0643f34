use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::report::dashboard_view;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::{header, info};
use crate::ui::summary::{print_aggregate, print_trend};
use crate::utils::colors::{color_for_departure, colorize_optional, paint};
use chrono::NaiveDate;

pub fn handle(cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let store = open_store(cfg)?;
    let settings = storage::load_settings(&store)?;
    let records = storage::load_records(&store)?;

    if records.is_empty() {
        info("No records yet. Start with `offwork add today HH:MM`.");
        return Ok(());
    }

    let view = dashboard_view(&records, &settings, today, cfg.trend_days);

    header(format!("This week (target {})", view.week.target));
    print_aggregate(&view.week, Some("last week"));
    println!();

    header("This month");
    print_aggregate(&view.month, Some("last month"));
    println!();

    header(format!("Last {} days", cfg.trend_days));
    print_trend(&view.trend);
    println!();

    header("Recent");
    for r in &view.recent {
        println!(
            "  {}  {}  {}",
            r.date_str(),
            paint(color_for_departure(r.time > settings.target_time), &r.time_str()),
            colorize_optional(r.note_or_dash())
        );
    }

    Ok(())
}
