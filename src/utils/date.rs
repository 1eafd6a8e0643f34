use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Like `parse_date`, but also understands `today` relative to `reference`.
pub fn parse_date_arg(s: &str, reference: NaiveDate) -> Option<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        return Some(reference);
    }
    parse_date(s.trim())
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Weekday index with Sunday = 0 … Saturday = 6.
pub fn weekday_from_sunday(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_sunday()
}

pub fn weekday_str(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Labels indexed by `weekday_from_sunday`.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Labels indexed by zero-based month.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short "M/D" label used for trend rows.
pub fn short_label(d: NaiveDate) -> String {
    format!("{}/{}", d.month(), d.day())
}
