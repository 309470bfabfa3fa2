use chrono::{Local, NaiveDate, TimeZone};

use repscount::utils::datetime::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_parse_date() {
    let parsed = parse_date("2024-01-02").unwrap();
    assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
}

#[test]
fn test_parse_date_rejects_garbage() {
    assert!(parse_date("tomorrow").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_timestamp_roundtrip() {
    let dt = Local.with_ymd_and_hms(2024, 3, 14, 15, 9, 26).unwrap();
    let stored = to_stored_timestamp(dt);
    let parsed = parse_timestamp(&stored).unwrap();
    assert_eq!(parsed, dt);
}

#[test]
fn test_parse_timestamp_rejects_garbage() {
    assert!(parse_timestamp("not-a-timestamp").is_none());
    assert!(parse_timestamp("").is_none());
}

#[test]
fn test_day_of_truncates_time() {
    let dt = Local.with_ymd_and_hms(2024, 3, 14, 23, 59, 59).unwrap();
    assert_eq!(day_of(dt), NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
}

#[test]
fn test_format_section_date_is_full() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let formatted = format_section_date(day);
    assert!(formatted.contains("Monday"));
    assert!(formatted.contains("January"));
    assert!(formatted.contains("2024"));
}

#[test]
fn test_format_time_short() {
    let dt = Local.with_ymd_and_hms(2024, 1, 1, 8, 5, 0).unwrap();
    assert_eq!(format_time_short(dt), "08:05");
}
