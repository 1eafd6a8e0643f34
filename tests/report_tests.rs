mod common;
use chrono::{TimeZone, Utc};
use common::{d, rec, rec_note, t};
use offwork::core::calculator::period::{DateRange, PeriodKind};
use offwork::core::report::{
    Comparison, DASHBOARD_RECENT, StatsRequest, dashboard_view, export_rows, full_export,
    stats_view,
};
use offwork::export::csv_string;
use offwork::models::settings::Settings;

fn june_records() -> Vec<offwork::models::record::Record> {
    vec![
        rec("2024-06-10", "17:45"),
        rec("2024-06-07", "18:10"),
        rec("2024-06-03", "18:30"),
        rec("2024-05-20", "17:30"),
        rec("2024-05-02", "19:30"),
        rec("2023-11-15", "16:45"),
    ]
}

#[test]
fn dashboard_compares_week_and_month() {
    let view = dashboard_view(&june_records(), &Settings::default(), d("2024-06-10"), 30);

    assert_eq!(view.week.current.count, 1);
    assert_eq!(view.week.current.average, Some(t("17:45")));
    assert_eq!(view.week.previous.as_ref().map(|p| p.count), Some(2));

    assert_eq!(view.month.current.count, 3);
    assert_eq!(view.month.previous.as_ref().map(|p| p.count), Some(2));
    assert!(view.month.deltas.is_some());

    // all-time extremes
    assert_eq!(view.week.earliest.map(|e| e.date), Some(d("2023-11-15")));
    assert_eq!(view.week.latest.map(|e| e.date), Some(d("2024-05-02")));
}

#[test]
fn dashboard_trend_and_recent() {
    let view = dashboard_view(&june_records(), &Settings::default(), d("2024-06-10"), 30);

    // 2024-05-11 onwards, oldest first
    let dates: Vec<_> = view.trend.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![d("2024-05-20"), d("2024-06-03"), d("2024-06-07"), d("2024-06-10")]
    );

    assert_eq!(view.recent.len(), DASHBOARD_RECENT);
    assert_eq!(view.recent[0].date, d("2024-06-10"));
}

#[test]
fn stats_uses_window_extremes_and_independent_comparison() {
    let request = StatsRequest {
        period: PeriodKind::Month,
        comparison: Comparison::LastDays(7),
        months_by_year: false,
    };
    let view = stats_view(&june_records(), &Settings::default(), d("2024-06-10"), request);

    assert_eq!(view.summary.current.count, 3);
    assert_eq!(view.summary.earliest.map(|e| e.date), Some(d("2024-06-10")));
    assert_eq!(view.summary.latest.map(|e| e.date), Some(d("2024-06-03")));

    // previous 7 days before the last 7: [05-28, 06-04)
    assert_eq!(
        view.comparison_range,
        Some(DateRange::new(d("2024-05-28"), d("2024-06-04")))
    );
    assert_eq!(view.summary.previous.as_ref().map(|p| p.count), Some(1));

    assert_eq!(view.by_weekday.len(), 7);
    assert_eq!(view.by_month[5].count, 3);
    assert_eq!(view.by_month[4].count, 0);
    assert_eq!(view.trend.len(), 3);
}

#[test]
fn stats_without_comparison() {
    let request = StatsRequest {
        period: PeriodKind::All,
        comparison: Comparison::None,
        months_by_year: true,
    };
    let view = stats_view(&june_records(), &Settings::default(), d("2024-06-10"), request);

    assert_eq!(view.summary.current.count, 6);
    assert!(view.summary.previous.is_none());
    assert!(view.summary.deltas.is_none());
    assert_eq!(view.by_month.first().map(|b| b.label.as_str()), Some("Nov 2023"));
}

#[test]
fn previous_comparison_on_all_has_no_range() {
    let view = stats_view(
        &june_records(),
        &Settings::default(),
        d("2024-06-10"),
        StatsRequest {
            period: PeriodKind::All,
            ..StatsRequest::default()
        },
    );
    assert_eq!(view.comparison_range, None);
}

#[test]
fn comparison_parses_user_input() {
    assert_eq!("previous".parse::<Comparison>().unwrap(), Comparison::PreviousPeriod);
    assert_eq!("30".parse::<Comparison>().unwrap(), Comparison::LastDays(30));
    assert_eq!("none".parse::<Comparison>().unwrap(), Comparison::None);
    assert!("14".parse::<Comparison>().is_err());
}

#[test]
fn export_rows_are_ascending_for_the_period() {
    let rows = export_rows(&june_records(), PeriodKind::Month, d("2024-06-10"));
    let dates: Vec<_> = rows.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-06-03", "2024-06-07", "2024-06-10"]);
}

#[test]
fn csv_quotes_only_when_needed() {
    let records = vec![
        rec_note("2024-06-03", "18:30", "say \"hi\", ok"),
        rec("2024-06-04", "17:55"),
        rec_note("2024-06-05", "18:00", "plain"),
    ];
    let rows = export_rows(&records, PeriodKind::All, d("2024-06-10"));
    let csv = csv_string(&rows).unwrap();

    assert_eq!(
        csv,
        "date,time,note\n\
         2024-06-03,18:30,\"say \"\"hi\"\", ok\"\n\
         2024-06-04,17:55,\n\
         2024-06-05,18:00,plain\n"
    );
}

#[test]
fn full_export_document_shape() {
    let now = Utc.with_ymd_and_hms(2024, 6, 10, 16, 30, 0).unwrap();
    let doc = full_export(&june_records(), &Settings::default(), now);

    assert_eq!(doc.export_date, "2024-06-10T16:30:00.000Z");
    assert_eq!(doc.records.len(), 6);
    assert_eq!(doc.records[0].date, d("2024-06-10"));

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["settings"]["targetTime"], "18:00");
    assert_eq!(json["records"][0]["time"], "17:45");
    assert!(json["records"][0].get("note").is_none());
    assert_eq!(json["exportDate"], "2024-06-10T16:30:00.000Z");
}

#[test]
fn config_trend_horizon_defaults_to_dashboard_constant() {
    assert_eq!(
        offwork::config::Config::default().trend_days,
        offwork::core::report::DASHBOARD_TREND_DAYS
    );
}
