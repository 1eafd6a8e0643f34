/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Departure color: red when after the target, green otherwise.
pub fn color_for_departure(late: bool) -> &'static str {
    if late { RED } else { GREEN }
}

/// Color of a "later is worse" delta (average time, overtime):
/// \>0 → red
/// \<0 → green
/// 0 → reset
pub fn color_for_lateness_delta(value: i64) -> &'static str {
    if value > 0 {
        RED
    } else if value < 0 {
        GREEN
    } else {
        RESET
    }
}

/// Color of a "higher is better" delta (on-time count and rate).
pub fn color_for_improvement(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Grey out placeholders such as "no data" or "--:--".
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "no data" || v == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
