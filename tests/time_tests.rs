use offwork::errors::AppError;
use offwork::utils::formatting::percent;
use offwork::utils::time::{
    ClockTime, average, average_minutes, average_or_zero, difference, is_earlier_or_equal,
    to_minutes, to_time_string,
};

#[test]
fn parses_valid_times() {
    assert_eq!(to_minutes("00:00").unwrap(), 0);
    assert_eq!(to_minutes("18:00").unwrap(), 1080);
    assert_eq!(to_minutes("9:05").unwrap(), 545);
    assert_eq!(to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn rejects_malformed_times() {
    for bad in ["", "18", "18:", ":30", "24:00", "12:60", "-1:00", "ab:cd", "18:00:00", " 18:00"] {
        assert!(
            matches!(to_minutes(bad), Err(AppError::InvalidTime(_))),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn formats_minutes_without_hour_padding() {
    assert_eq!(to_time_string(0), "0:00");
    assert_eq!(to_time_string(545), "9:05");
    assert_eq!(to_time_string(1095), "18:15");
}

#[test]
fn averages_round_half_up() {
    assert_eq!(average(&["18:00", "18:30"]).unwrap().as_deref(), Some("18:15"));
    assert_eq!(
        average(&["18:00", "18:00", "19:00"]).unwrap().as_deref(),
        Some("18:20")
    );
    assert_eq!(average(&["18:00", "19:00"]).unwrap().as_deref(), Some("18:30"));
    // 18:00 and 18:01 → 18:00.5 → 18:01
    assert_eq!(average(&["18:00", "18:01"]).unwrap().as_deref(), Some("18:01"));
}

#[test]
fn average_of_nothing_is_no_data() {
    let empty: [&str; 0] = [];
    assert_eq!(average(&empty).unwrap(), None);
    assert_eq!(average_or_zero(&empty).unwrap(), "0:00");
    assert_eq!(average_minutes(&[]), None);
}

#[test]
fn average_propagates_invalid_entries() {
    assert!(average(&["18:00", "nope"]).is_err());
}

#[test]
fn difference_is_signed_and_tolerates_empty_sides() {
    assert_eq!(difference("19:00", "18:00").unwrap(), 60);
    assert_eq!(difference("18:00", "19:00").unwrap(), -60);
    assert_eq!(difference("", "18:00").unwrap(), 0);
    assert_eq!(difference("18:00", "").unwrap(), 0);
}

#[test]
fn earlier_or_equal_includes_the_target_minute() {
    assert!(is_earlier_or_equal("18:00", "18:00").unwrap());
    assert!(is_earlier_or_equal("17:59", "18:00").unwrap());
    assert!(!is_earlier_or_equal("18:01", "18:00").unwrap());
}

#[test]
fn clock_time_displays_zero_padded() {
    let t: ClockTime = "9:05".parse().unwrap();
    assert_eq!(t.to_string(), "09:05");
    assert_eq!(t.short(), "9:05");
    assert_eq!(t.hour(), 9);
    assert_eq!(t.minute(), 5);
    assert!(ClockTime::from_hm(24, 0).is_none());
    assert_eq!(ClockTime::from_minutes(1439), Some(ClockTime::LAST_MINUTE));
    assert!(ClockTime::from_minutes(1440).is_none());
}

#[test]
fn clock_time_serializes_as_string() {
    let t: ClockTime = serde_json::from_str("\"18:30\"").unwrap();
    assert_eq!(t.minutes(), 1110);
    assert_eq!(serde_json::to_string(&t).unwrap(), "\"18:30\"");
    assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
}

#[test]
fn every_minute_of_the_day_round_trips() {
    for minutes in 0..1440 {
        let text = to_time_string(minutes);
        assert_eq!(to_minutes(&text).unwrap(), minutes, "round trip of {text}");
        assert_eq!(to_time_string(to_minutes(&text).unwrap()), text);
    }
}

#[test]
fn padded_and_unpadded_hours_normalize_alike() {
    assert_eq!(to_minutes("09:05").unwrap(), to_minutes("9:05").unwrap());
    assert_eq!(to_time_string(to_minutes("09:05").unwrap()), "9:05");
    assert_eq!(
        "09:05".parse::<ClockTime>().unwrap(),
        "9:05".parse::<ClockTime>().unwrap()
    );
}

#[test]
fn rejects_extra_digits() {
    for bad in ["18:000", "018:00", "18:5", "0018:00"] {
        assert!(
            matches!(to_minutes(bad), Err(AppError::InvalidTime(_))),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn percent_rounds_half_up() {
    assert_eq!(percent(Some(0.125)), "13%");
    assert_eq!(percent(Some(0.5)), "50%");
    assert_eq!(percent(Some(1.0)), "100%");
    assert_eq!(percent(None), "no data");
}
