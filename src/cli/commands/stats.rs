use crate::cli::commands::{open_store, period_or_default};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{Comparison, StatsRequest, stats_view};
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::header;
use crate::ui::summary::{print_aggregate, print_buckets, print_trend};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Stats {
        period,
        compare,
        by_year,
    } = cmd
    {
        let comparison: Comparison = match compare {
            Some(c) => c.parse()?,
            None => cfg.default_compare.parse()?,
        };
        let request = StatsRequest {
            period: period_or_default(*period, cfg)?,
            comparison,
            months_by_year: *by_year,
        };

        let store = open_store(cfg)?;
        let settings = storage::load_settings(&store)?;
        let records = storage::load_records(&store)?;

        let view = stats_view(&records, &settings, today, request);

        header(format!(
            "{} ({}), target {}",
            view.request.period.label(),
            view.window.current,
            view.summary.target
        ));

        let label = match (view.request.comparison, view.comparison_range) {
            (Comparison::None, _) | (_, None) => None,
            (c, Some(range)) => Some(format!("{} ({})", c.label(), range)),
        };
        print_aggregate(&view.summary, label.as_deref());
        println!();

        header("By weekday");
        print_buckets("Weekday", &view.by_weekday);
        println!();

        header("By month");
        print_buckets("Month", &view.by_month);
        println!();

        header("Trend");
        print_trend(&view.trend);
    }

    Ok(())
}
