//! Time utilities: parsing HH:MM, minute arithmetic, averages and the
//! `ClockTime` value used by every record.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse "HH:MM" (or "H:MM") into minutes since midnight.
///
/// Hours are one or two digits in 0..=23, minutes exactly two digits in
/// 0..=59.
pub fn to_minutes(time: &str) -> AppResult<i64> {
    let invalid = || AppError::InvalidTime(time.to_string());

    let (h, m) = time.split_once(':').ok_or_else(invalid)?;
    if h.is_empty() || m.is_empty() {
        return Err(invalid());
    }
    if h.len() > 2 || m.len() != 2 {
        return Err(invalid());
    }
    if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i64 = h.parse().map_err(|_| invalid())?;
    let minutes: i64 = m.parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as "H:MM" (hours are not padded).
pub fn to_time_string(minutes: i64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Mean of a set of minute values, rounded half-up to the nearest minute.
pub fn average_minutes(values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as i64;
    let total: i64 = values.iter().sum();
    Some((2 * total + n) / (2 * n))
}

/// Average of "HH:MM" strings formatted as "H:MM".
///
/// `None` means "no data": an empty input has no average.
pub fn average<S: AsRef<str>>(times: &[S]) -> AppResult<Option<String>> {
    let minutes = times
        .iter()
        .map(|t| to_minutes(t.as_ref()))
        .collect::<AppResult<Vec<_>>>()?;

    Ok(average_minutes(&minutes).map(to_time_string))
}

/// Same as [`average`] but collapses "no data" into the neutral "0:00".
pub fn average_or_zero<S: AsRef<str>>(times: &[S]) -> AppResult<String> {
    Ok(average(times)?.unwrap_or_else(|| to_time_string(0)))
}

/// Signed difference `a - b` in minutes; positive means `a` is later.
///
/// An empty side means no comparison is possible and yields 0.
pub fn difference(a: &str, b: &str) -> AppResult<i64> {
    if a.is_empty() || b.is_empty() {
        return Ok(0);
    }
    Ok(to_minutes(a)? - to_minutes(b)?)
}

pub fn is_earlier_or_equal(a: &str, b: &str) -> AppResult<bool> {
    Ok(difference(a, b)? <= 0)
}

/// A validated time of day with minute resolution (00:00..=23:59).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const LAST_MINUTE: ClockTime = ClockTime(23 * 60 + 59);

    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(ClockTime((hours * 60 + minutes) as u16))
    }

    pub fn from_minutes(minutes: i64) -> Option<Self> {
        if (0..MINUTES_PER_DAY).contains(&minutes) {
            Some(ClockTime(minutes as u16))
        } else {
            None
        }
    }

    pub fn minutes(self) -> i64 {
        self.0 as i64
    }

    pub fn hour(self) -> u32 {
        (self.0 / 60) as u32
    }

    pub fn minute(self) -> u32 {
        (self.0 % 60) as u32
    }

    /// Signed minutes between `self` and `other` (`self - other`).
    pub fn minutes_since(self, other: ClockTime) -> i64 {
        self.minutes() - other.minutes()
    }

    /// Compact "H:MM" form used for averages.
    pub fn short(self) -> String {
        to_time_string(self.minutes())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes = to_minutes(s)?;
        Ok(ClockTime(minutes as u16))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
