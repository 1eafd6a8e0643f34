//! Aggregation of departure records over a window, with optional
//! comparison against a previous window.

use crate::core::calculator::period::DateRange;
use crate::models::record::Record;
use crate::utils::time::{ClockTime, average_minutes};
use chrono::NaiveDate;
use serde::Serialize;

/// Earliest or latest departure together with the day it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Extreme {
    pub time: ClockTime,
    pub date: NaiveDate,
}

/// Scalar metrics of one window. `None` values mean "no data".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSnapshot {
    pub count: usize,
    pub average: Option<ClockTime>,
    pub on_time_count: usize,
    pub on_time_rate: Option<f64>,
    pub total_overtime_minutes: i64,
}

impl PeriodSnapshot {
    pub fn from_records(records: &[&Record], target: ClockTime) -> Self {
        let minutes: Vec<i64> = records.iter().map(|r| r.time.minutes()).collect();
        let average = average_minutes(&minutes).and_then(ClockTime::from_minutes);

        let on_time_count = records.iter().filter(|r| r.time <= target).count();
        let on_time_rate = if records.is_empty() {
            None
        } else {
            Some(on_time_count as f64 / records.len() as f64)
        };

        let total_overtime_minutes = records
            .iter()
            .filter(|r| r.time > target)
            .map(|r| r.time.minutes_since(target))
            .sum();

        Self {
            count: records.len(),
            average,
            on_time_count,
            on_time_rate,
            total_overtime_minutes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Signed distance of the average from `target`; positive = later.
    pub fn average_vs(&self, target: ClockTime) -> Option<i64> {
        self.average.map(|a| a.minutes_since(target))
    }
}

/// Current minus previous. Positive average/overtime deltas mean "later",
/// positive on-time deltas mean "improved".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deltas {
    pub average_minutes: Option<i64>,
    pub on_time_count: i64,
    pub on_time_rate: Option<f64>,
    pub overtime_minutes: i64,
}

impl Deltas {
    /// `None` when there is nothing to compare against.
    pub fn between(current: &PeriodSnapshot, previous: &PeriodSnapshot) -> Option<Self> {
        if previous.is_empty() {
            return None;
        }

        let average_minutes = match (current.average, previous.average) {
            (Some(c), Some(p)) => Some(c.minutes_since(p)),
            _ => None,
        };
        let on_time_rate = match (current.on_time_rate, previous.on_time_rate) {
            (Some(c), Some(p)) => Some(c - p),
            _ => None,
        };

        Some(Self {
            average_minutes,
            on_time_count: current.on_time_count as i64 - previous.on_time_count as i64,
            on_time_rate,
            overtime_minutes: current.total_overtime_minutes - previous.total_overtime_minutes,
        })
    }
}

/// Which records the earliest/latest scan looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtremesScope {
    /// Only records inside the current window.
    #[default]
    Window,
    /// Every record handed to the aggregator.
    All,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    pub extremes: ExtremesScope,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub target: ClockTime,
    pub current: PeriodSnapshot,
    pub target_diff_minutes: Option<i64>,
    pub earliest: Option<Extreme>,
    pub latest: Option<Extreme>,
    pub previous: Option<PeriodSnapshot>,
    pub deltas: Option<Deltas>,
}

/// Minimum and maximum departure; ties keep the first record seen.
pub fn extremes<'a, I>(records: I) -> (Option<Extreme>, Option<Extreme>)
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut earliest: Option<Extreme> = None;
    let mut latest: Option<Extreme> = None;

    for r in records {
        let candidate = Extreme {
            time: r.time,
            date: r.date,
        };
        if earliest.is_none_or(|e| r.time < e.time) {
            earliest = Some(candidate);
        }
        if latest.is_none_or(|l| r.time > l.time) {
            latest = Some(candidate);
        }
    }

    (earliest, latest)
}

pub fn aggregate(
    records: &[Record],
    target: ClockTime,
    window: &DateRange,
    previous_window: Option<&DateRange>,
) -> AggregateResult {
    aggregate_with(
        records,
        target,
        window,
        previous_window,
        AggregateOptions::default(),
    )
}

pub fn aggregate_with(
    records: &[Record],
    target: ClockTime,
    window: &DateRange,
    previous_window: Option<&DateRange>,
    options: AggregateOptions,
) -> AggregateResult {
    let current: Vec<&Record> = records.iter().filter(|r| window.contains(r.date)).collect();
    let current_snapshot = PeriodSnapshot::from_records(&current, target);

    let (earliest, latest) = match options.extremes {
        ExtremesScope::Window => extremes(current.iter().copied()),
        ExtremesScope::All => extremes(records),
    };

    let previous_snapshot = previous_window.map(|pw| {
        let previous: Vec<&Record> = records.iter().filter(|r| pw.contains(r.date)).collect();
        PeriodSnapshot::from_records(&previous, target)
    });

    let deltas = previous_snapshot
        .as_ref()
        .and_then(|p| Deltas::between(&current_snapshot, p));

    AggregateResult {
        target,
        target_diff_minutes: current_snapshot.average_vs(target),
        current: current_snapshot,
        earliest,
        latest,
        previous: previous_snapshot,
        deltas,
    }
}
