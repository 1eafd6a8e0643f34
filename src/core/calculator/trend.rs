use crate::models::record::Record;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use serde::Serialize;

/// One point of the chronological departure series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub time: ClockTime,
    pub minutes: i64,
    pub late: bool,
}

fn to_points<'a, I>(records: I, target: ClockTime) -> Vec<TrendPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut points: Vec<TrendPoint> = records
        .into_iter()
        .map(|r| TrendPoint {
            date: r.date,
            time: r.time,
            minutes: r.time.minutes(),
            late: r.time > target,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Records dated on or after `since`, oldest first.
pub fn trend_since(records: &[Record], since: NaiveDate, target: ClockTime) -> Vec<TrendPoint> {
    to_points(records.iter().filter(|r| r.date >= since), target)
}

/// The `n` most recent records, oldest first.
pub fn trend_last(records: &[Record], n: usize, target: ClockTime) -> Vec<TrendPoint> {
    let mut points = to_points(records, target);
    let skip = points.len().saturating_sub(n);
    points.drain(..skip);
    points
}
