//! Per-weekday and per-month average departures.

use crate::models::record::Record;
use crate::utils::date::{MONTH_LABELS, WEEKDAY_LABELS, weekday_from_sunday};
use crate::utils::time::{ClockTime, average_minutes};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub index: u32,
    pub label: String,
    pub count: usize,
    /// `None` when the bucket has no records.
    pub average: Option<ClockTime>,
    pub diff_from_target: Option<i64>,
}

impl Bucket {
    fn build(index: u32, label: String, minutes: &[i64], target: ClockTime) -> Self {
        let average = average_minutes(minutes).and_then(ClockTime::from_minutes);
        Self {
            index,
            label,
            count: minutes.len(),
            average,
            diff_from_target: average.map(|a| a.minutes_since(target)),
        }
    }

    pub fn is_late(&self) -> bool {
        self.diff_from_target.is_some_and(|d| d > 0)
    }
}

/// Seven buckets, Sunday (0) to Saturday (6).
pub fn by_weekday(records: &[Record], target: ClockTime) -> Vec<Bucket> {
    let mut slots: [Vec<i64>; 7] = Default::default();
    for r in records {
        slots[weekday_from_sunday(r.date) as usize].push(r.time.minutes());
    }

    slots
        .iter()
        .enumerate()
        .map(|(i, m)| Bucket::build(i as u32, WEEKDAY_LABELS[i].to_string(), m, target))
        .collect()
}

/// Twelve buckets, January (0) to December (11). Years are merged: June 2023
/// and June 2024 land in the same bucket.
pub fn by_month(records: &[Record], target: ClockTime) -> Vec<Bucket> {
    let mut slots: [Vec<i64>; 12] = Default::default();
    for r in records {
        slots[r.date.month0() as usize].push(r.time.minutes());
    }

    slots
        .iter()
        .enumerate()
        .map(|(i, m)| Bucket::build(i as u32, MONTH_LABELS[i].to_string(), m, target))
        .collect()
}

/// One bucket per (year, month) that has records, oldest first.
pub fn by_year_month(records: &[Record], target: ClockTime) -> Vec<Bucket> {
    let mut slots: BTreeMap<(i32, u32), Vec<i64>> = BTreeMap::new();
    for r in records {
        slots
            .entry((r.date.year(), r.date.month0()))
            .or_default()
            .push(r.time.minutes());
    }

    slots
        .iter()
        .map(|(&(year, month0), m)| {
            let label = format!("{} {}", MONTH_LABELS[month0 as usize], year);
            Bucket::build(month0, label, m, target)
        })
        .collect()
}
