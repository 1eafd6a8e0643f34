//! Report views built on top of the calculator: dashboard, stats and export.
//!
//! Every view takes a snapshot of the records and the settings and returns a
//! fresh value. Nothing here touches storage or mutates its inputs.

use crate::core::calculator::aggregate::{
    AggregateOptions, AggregateResult, ExtremesScope, aggregate_with,
};
use crate::core::calculator::breakdown::{Bucket, by_month, by_weekday, by_year_month};
use crate::core::calculator::period::{
    DateRange, PeriodKind, PeriodWindow, previous_rolling_window, shift,
};
use crate::core::calculator::trend::{TrendPoint, trend_last, trend_since};
use crate::errors::AppError;
use crate::export::model::{ExportRow, FullExport};
use crate::models::record::{Record, sort_ascending, sort_descending};
use crate::models::settings::Settings;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const DASHBOARD_TREND_DAYS: i64 = 30;
pub const DASHBOARD_RECENT: usize = 5;
pub const STATS_TREND_POINTS: usize = 30;

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub today: NaiveDate,
    pub week: AggregateResult,
    pub month: AggregateResult,
    pub trend: Vec<TrendPoint>,
    pub recent: Vec<Record>,
}

/// This week vs last week, this month vs last month, the recent trend and the
/// latest records. Earliest/latest here cover every record (all-time bests).
pub fn dashboard_view(
    records: &[Record],
    settings: &Settings,
    today: NaiveDate,
    trend_days: i64,
) -> DashboardView {
    let target = settings.target_time;
    let options = AggregateOptions {
        extremes: ExtremesScope::All,
    };

    let week_window = PeriodWindow::resolve(PeriodKind::Week, today);
    let month_window = PeriodWindow::resolve(PeriodKind::Month, today);

    let week = aggregate_with(
        records,
        target,
        &week_window.current,
        week_window.previous.as_ref(),
        options,
    );
    let month = aggregate_with(
        records,
        target,
        &month_window.current,
        month_window.previous.as_ref(),
        options,
    );

    let trend = trend_since(records, shift(today, -trend_days), target);

    let mut recent = records.to_vec();
    sort_descending(&mut recent);
    recent.truncate(DASHBOARD_RECENT);

    debug!(
        week = week.current.count,
        month = month.current.count,
        trend = trend.len(),
        "dashboard view computed"
    );

    DashboardView {
        today,
        week,
        month,
        trend,
        recent,
    }
}

/// What the stats view compares its period against. Chosen independently of
/// the period filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    None,
    /// The period immediately before the selected one (last week, last month…).
    PreviousPeriod,
    /// `[today+1 - 2n, today+1 - n)` over all records.
    LastDays(i64),
}

impl Comparison {
    pub fn label(&self) -> String {
        match self {
            Comparison::None => "no comparison".to_string(),
            Comparison::PreviousPeriod => "previous period".to_string(),
            Comparison::LastDays(n) => format!("the {n} days before the last {n}"),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::None => f.write_str("none"),
            Comparison::PreviousPeriod => f.write_str("previous"),
            Comparison::LastDays(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Comparison {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Comparison::None),
            "previous" | "prev" => Ok(Comparison::PreviousPeriod),
            "7" | "last7" => Ok(Comparison::LastDays(7)),
            "30" | "last30" => Ok(Comparison::LastDays(30)),
            "90" | "last90" => Ok(Comparison::LastDays(90)),
            other => Err(AppError::InvalidPeriod(format!(
                "unsupported comparison '{other}' (use 7, 30, 90, previous or none)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StatsRequest {
    pub period: PeriodKind,
    pub comparison: Comparison,
    /// Split the monthly breakdown by year instead of merging years.
    pub months_by_year: bool,
}

impl Default for StatsRequest {
    fn default() -> Self {
        Self {
            period: PeriodKind::Month,
            comparison: Comparison::PreviousPeriod,
            months_by_year: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatsView {
    pub request: StatsRequest,
    pub window: PeriodWindow,
    pub comparison_range: Option<DateRange>,
    pub summary: AggregateResult,
    pub by_weekday: Vec<Bucket>,
    pub by_month: Vec<Bucket>,
    pub trend: Vec<TrendPoint>,
}

pub fn comparison_range(
    comparison: Comparison,
    window: &PeriodWindow,
    today: NaiveDate,
) -> Option<DateRange> {
    match comparison {
        Comparison::None => None,
        Comparison::PreviousPeriod => window.previous,
        Comparison::LastDays(n) => Some(previous_rolling_window(shift(today, 1), n)),
    }
}

/// Summary, breakdowns and trend for one period filter. Earliest/latest are
/// taken from the filtered records only.
pub fn stats_view(
    records: &[Record],
    settings: &Settings,
    today: NaiveDate,
    request: StatsRequest,
) -> StatsView {
    let target = settings.target_time;
    let window = PeriodWindow::resolve(request.period, today);
    let comparison = comparison_range(request.comparison, &window, today);

    let summary = aggregate_with(
        records,
        target,
        &window.current,
        comparison.as_ref(),
        AggregateOptions {
            extremes: ExtremesScope::Window,
        },
    );

    let filtered = filter_by_period(records, &window);

    let by_weekday = by_weekday(&filtered, target);
    let by_month = if request.months_by_year {
        by_year_month(&filtered, target)
    } else {
        by_month(&filtered, target)
    };
    let trend = trend_last(&filtered, STATS_TREND_POINTS, target);

    debug!(
        period = %request.period,
        comparison = %request.comparison,
        filtered = filtered.len(),
        "stats view computed"
    );

    StatsView {
        request,
        window,
        comparison_range: comparison,
        summary,
        by_weekday,
        by_month,
        trend,
    }
}

/// Records whose date falls in the window's current range.
pub fn filter_by_period(records: &[Record], window: &PeriodWindow) -> Vec<Record> {
    records
        .iter()
        .filter(|r| window.current.contains(r.date))
        .cloned()
        .collect()
}

/// Flat `(date, time, note)` rows for the period, oldest first.
pub fn export_rows(records: &[Record], period: PeriodKind, today: NaiveDate) -> Vec<ExportRow> {
    let window = PeriodWindow::resolve(period, today);
    let mut selected = filter_by_period(records, &window);
    sort_ascending(&mut selected);
    selected.iter().map(ExportRow::from).collect()
}

/// Everything the user owns, stamped with the export instant.
pub fn full_export(records: &[Record], settings: &Settings, now: DateTime<Utc>) -> FullExport {
    let mut all = records.to_vec();
    sort_descending(&mut all);
    FullExport {
        records: all,
        settings: settings.clone(),
        export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}
