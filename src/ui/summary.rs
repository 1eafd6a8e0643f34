//! Terminal rendering shared by the dashboard and stats views.

use crate::core::calculator::aggregate::{AggregateResult, Deltas, Extreme};
use crate::core::calculator::breakdown::Bucket;
use crate::core::calculator::trend::TrendPoint;
use crate::ui::messages::field;
use crate::utils::colors::{
    color_for_departure, color_for_improvement, color_for_lateness_delta, colorize_optional,
    paint,
};
use crate::utils::date::{format_date, short_label, weekday_str};
use crate::utils::formatting::{
    NO_DATA, describe_vs_target, mins2readable, percent, percent_points, signed_count,
    time_or_no_data,
};
use crate::utils::table::{Column, Table};

fn extreme_str(e: Option<Extreme>) -> String {
    match e {
        Some(e) => format!("{} ({} {})", e.time, weekday_str(e.date), format_date(e.date)),
        None => NO_DATA.to_string(),
    }
}

/// Print the scalar metrics of `result`, then the comparison if any.
pub fn print_aggregate(result: &AggregateResult, comparison_label: Option<&str>) {
    let cur = &result.current;

    field("Records", cur.count);
    field("Average", colorize_optional(&time_or_no_data(cur.average)));
    field(
        "vs target",
        match result.target_diff_minutes {
            Some(d) => paint(color_for_lateness_delta(d), &describe_vs_target(d)),
            None => colorize_optional(NO_DATA),
        },
    );
    field(
        "On time",
        format!("{} ({})", cur.on_time_count, percent(cur.on_time_rate)),
    );
    field(
        "Overtime",
        mins2readable(cur.total_overtime_minutes, false, false),
    );
    field("Earliest", colorize_optional(&extreme_str(result.earliest)));
    field("Latest", colorize_optional(&extreme_str(result.latest)));

    let Some(label) = comparison_label else {
        return;
    };

    match &result.deltas {
        Some(d) => print_deltas(d, label),
        None => field(&format!("vs {label}"), colorize_optional(NO_DATA)),
    }
}

fn print_deltas(d: &Deltas, label: &str) {
    println!("  Compared with {label}:");

    field(
        "  Average",
        match d.average_minutes {
            Some(m) => paint(color_for_lateness_delta(m), &mins2readable(m, true, false)),
            None => colorize_optional(NO_DATA),
        },
    );
    field(
        "  On-time days",
        paint(
            color_for_improvement(d.on_time_count as f64),
            &signed_count(d.on_time_count),
        ),
    );
    field(
        "  On-time rate",
        match d.on_time_rate {
            Some(r) => paint(color_for_improvement(r), &percent_points(r)),
            None => colorize_optional(NO_DATA),
        },
    );
    field(
        "  Overtime",
        paint(
            color_for_lateness_delta(d.overtime_minutes),
            &mins2readable(d.overtime_minutes, true, false),
        ),
    );
}

/// Weekday or month buckets as a table; empty buckets show "no data".
pub fn print_buckets(title: &str, buckets: &[Bucket]) {
    let mut table = Table::new(vec![
        Column::new(title, 9),
        Column::new("Days", 5),
        Column::new("Average", 8),
        Column::new("vs target", 12),
    ]);

    for b in buckets {
        let (avg, diff) = match (b.average, b.diff_from_target) {
            (Some(a), Some(d)) => (
                a.to_string(),
                paint(color_for_lateness_delta(d), &mins2readable(d, true, false)),
            ),
            _ => (colorize_optional(NO_DATA), colorize_optional("-")),
        };
        table.add_row(vec![b.label.clone(), b.count.to_string(), avg, diff]);
    }

    print!("{}", table.render());
}

/// One line per point, late departures in red.
pub fn print_trend(points: &[TrendPoint]) {
    if points.is_empty() {
        println!("  {}", colorize_optional(NO_DATA));
        return;
    }

    for p in points {
        let bar = "█".repeat(((p.minutes / 30).max(1)) as usize);
        println!(
            "  {:>5}  {}  {}",
            short_label(p.date),
            paint(color_for_departure(p.late), &p.time.to_string()),
            paint(color_for_departure(p.late), &bar)
        );
    }
}
