//! Formatting utilities used for CLI and export outputs.

use crate::utils::time::ClockTime;

pub const NO_DATA: &str = "no data";

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // +02:25 / -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +2h 25m / -1h 10m / +45m
        if hours > 0 {
            format!("{}{}h {:02}m", sign, hours, minutes)
        } else {
            format!("{}{}m", sign, minutes)
        }
    }
}

/// "HH:MM", or the "no data" placeholder.
pub fn time_or_no_data(time: Option<ClockTime>) -> String {
    time.map(|t| t.to_string())
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// Signed minutes relative to the target: "+12m later", "-5m earlier", "on target".
pub fn describe_vs_target(diff: i64) -> String {
    if diff > 0 {
        format!("{} later", mins2readable(diff, true, false))
    } else if diff < 0 {
        format!("{} earlier", mins2readable(diff, true, false))
    } else {
        "on target".to_string()
    }
}

/// Ratio in [0, 1] as a whole percentage.
pub fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{}%", (r * 100.0).round() as i64),
        None => NO_DATA.to_string(),
    }
}

/// Ratio difference as signed percentage points.
pub fn percent_points(delta: f64) -> String {
    let pts = (delta * 100.0).round() as i64;
    if pts > 0 {
        format!("+{pts} pts")
    } else {
        format!("{pts} pts")
    }
}

pub fn signed_count(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
