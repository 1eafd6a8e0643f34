//! Calendar bucketing: week numbers, same-period predicates and the
//! `[start, end)` windows the aggregator filters on.
//!
//! Week numbers use the simple "Sunday-started, clipped to the year" scheme:
//!
//! ```text
//! week = ceil((days_since_jan1 + weekday_of_jan1 + 1) / 7)     (Sunday = 0)
//! ```
//!
//! This is not ISO-8601. Week 1 may be shorter than seven days and the last
//! days of December may be numbered 53. Dates are bucketed exactly by this
//! formula so that "this week" and "last week" agree with the numbers shown
//! to the user.

use crate::errors::AppError;
use crate::utils::date::weekday_from_sunday;
use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Half-open date interval `[start, end)`; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn since(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date < e)
    }

    /// Last day included in the range, if bounded.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.end.map(|e| shift(e, -1))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.last_day()) {
            (Some(s), Some(e)) => write!(f, "{s} → {e}"),
            (Some(s), None) => write!(f, "since {s}"),
            (None, Some(e)) => write!(f, "until {e}"),
            (None, None) => write!(f, "all time"),
        }
    }
}

/// Move `date` by a signed number of days, saturating at the calendar limits.
pub fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

fn jan1(year: i32) -> NaiveDate {
    NaiveDate::from_yo_opt(year, 1).unwrap_or(NaiveDate::MIN)
}

fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(NaiveDate::MIN)
}

/// First day of the month after (`year`, `month0`), rolling into January.
fn first_of_next_month(year: i32, month0: u32) -> NaiveDate {
    if month0 >= 11 {
        first_of_month(year + 1, 0)
    } else {
        first_of_month(year, month0 + 1)
    }
}

/// Weekday index of January 1st of `date`'s year (Sunday = 0).
fn jan1_weekday(date: NaiveDate) -> u32 {
    (weekday_from_sunday(date) + 7 - date.ordinal0() % 7) % 7
}

pub fn week_number(date: NaiveDate) -> u32 {
    (date.ordinal0() + jan1_weekday(date) + 1).div_ceil(7)
}

pub fn is_same_week(date: NaiveDate, reference: NaiveDate) -> bool {
    week_number(date) == week_number(reference) && date.year() == reference.year()
}

/// Membership in the week before `reference`'s week. In week 1 the previous
/// week is every day of the prior year numbered 52 or later.
pub fn is_previous_week(date: NaiveDate, reference: NaiveDate) -> bool {
    let current = week_number(reference);
    if current <= 1 {
        return week_number(date) >= 52 && date.year() == reference.year() - 1;
    }
    week_number(date) == current - 1 && date.year() == reference.year()
}

pub fn is_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.month0() == reference.month0() && date.year() == reference.year()
}

pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3
}

pub fn is_same_quarter(date: NaiveDate, reference: NaiveDate) -> bool {
    quarter_of(date) == quarter_of(reference) && date.year() == reference.year()
}

pub fn is_same_year(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year()
}

/// Zero-based month and year of the month before `reference`.
pub fn previous_month(reference: NaiveDate) -> (u32, i32) {
    match reference.month0() {
        0 => (11, reference.year() - 1),
        m => (m - 1, reference.year()),
    }
}

/// `[reference - days, reference)`.
pub fn rolling_window(reference: NaiveDate, days: i64) -> DateRange {
    DateRange::new(shift(reference, -days), reference)
}

/// `[reference - 2·days, reference - days)`.
pub fn previous_rolling_window(reference: NaiveDate, days: i64) -> DateRange {
    DateRange::new(shift(reference, -2 * days), shift(reference, -days))
}

/// Days of week `n` of `year`, clipped to the year.
pub fn week_range(year: i32, n: u32) -> DateRange {
    let start_of_year = jan1(year);
    let offset = jan1_weekday(start_of_year) as i64;
    let days_in_year = (jan1(year + 1) - start_of_year).num_days();

    let first = (7 * (n as i64 - 1) - offset).max(0);
    let last = (7 * n as i64 - offset).min(days_in_year);

    DateRange::new(shift(start_of_year, first), shift(start_of_year, last))
}

pub fn current_week_range(reference: NaiveDate) -> DateRange {
    week_range(reference.year(), week_number(reference))
}

/// Range equivalent to [`is_previous_week`].
pub fn previous_week_range(reference: NaiveDate) -> DateRange {
    let current = week_number(reference);
    if current > 1 {
        return week_range(reference.year(), current - 1);
    }

    let prior_year = reference.year() - 1;
    let start_of_prior = jan1(prior_year);
    let offset = jan1_weekday(start_of_prior) as i64;
    let first = (7 * 51 - offset).max(0);

    DateRange::new(shift(start_of_prior, first), jan1(reference.year()))
}

pub fn month_range(year: i32, month0: u32) -> DateRange {
    DateRange::new(
        first_of_month(year, month0),
        first_of_next_month(year, month0),
    )
}

pub fn quarter_range(year: i32, quarter: u32) -> DateRange {
    DateRange::new(
        first_of_month(year, quarter * 3),
        first_of_next_month(year, quarter * 3 + 2),
    )
}

pub fn year_range(year: i32) -> DateRange {
    DateRange::new(jan1(year), jan1(year + 1))
}

/// Period filters understood by the report views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodKind {
    Week,
    Month,
    Quarter,
    Year,
    Last7,
    Last30,
    Last90,
    All,
}

impl PeriodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::Quarter => "quarter",
            PeriodKind::Year => "year",
            PeriodKind::Last7 => "last7",
            PeriodKind::Last30 => "last30",
            PeriodKind::Last90 => "last90",
            PeriodKind::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodKind::Week => "This week",
            PeriodKind::Month => "This month",
            PeriodKind::Quarter => "This quarter",
            PeriodKind::Year => "This year",
            PeriodKind::Last7 => "Last 7 days",
            PeriodKind::Last30 => "Last 30 days",
            PeriodKind::Last90 => "Last 90 days",
            PeriodKind::All => "All time",
        }
    }

    pub fn rolling_days(&self) -> Option<i64> {
        match self {
            PeriodKind::Last7 => Some(7),
            PeriodKind::Last30 => Some(30),
            PeriodKind::Last90 => Some(90),
            _ => None,
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(PeriodKind::Week),
            "month" => Ok(PeriodKind::Month),
            "quarter" => Ok(PeriodKind::Quarter),
            "year" => Ok(PeriodKind::Year),
            "last7" | "7" => Ok(PeriodKind::Last7),
            "last30" | "30" => Ok(PeriodKind::Last30),
            "last90" | "90" => Ok(PeriodKind::Last90),
            "all" => Ok(PeriodKind::All),
            other => Err(AppError::InvalidPeriod(other.to_string())),
        }
    }
}

/// A period's own range plus the range of the period before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub kind: PeriodKind,
    pub current: DateRange,
    pub previous: Option<DateRange>,
}

impl PeriodWindow {
    /// Resolve `kind` around `today`. Rolling kinds end after `today`, so the
    /// reference day itself is counted.
    pub fn resolve(kind: PeriodKind, today: NaiveDate) -> Self {
        let year = today.year();

        let (current, previous) = match kind {
            PeriodKind::Week => (current_week_range(today), Some(previous_week_range(today))),
            PeriodKind::Month => {
                let (pm, py) = previous_month(today);
                (month_range(year, today.month0()), Some(month_range(py, pm)))
            }
            PeriodKind::Quarter => {
                let q = quarter_of(today);
                let (pq, py) = if q == 0 { (3, year - 1) } else { (q - 1, year) };
                (quarter_range(year, q), Some(quarter_range(py, pq)))
            }
            PeriodKind::Year => (year_range(year), Some(year_range(year - 1))),
            PeriodKind::Last7 | PeriodKind::Last30 | PeriodKind::Last90 => {
                let days = kind.rolling_days().unwrap_or(7);
                let reference = shift(today, 1);
                (
                    rolling_window(reference, days),
                    Some(previous_rolling_window(reference, days)),
                )
            }
            PeriodKind::All => (DateRange::unbounded(), None),
        };

        Self {
            kind,
            current,
            previous,
        }
    }
}
