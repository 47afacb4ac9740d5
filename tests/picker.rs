mod common;
use crate::common::{d, dt};

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use workdeps::constraint::{disabled_days, is_date_blocked, parse_date};

#[test]
fn blocked_compares_calendar_days_only() {
    assert!(is_date_blocked(dt("2024-01-10T23:59"), Some(dt("2024-01-11T00:00"))));
    assert!(!is_date_blocked(dt("2024-01-11T08:00"), Some(dt("2024-01-11T20:00"))));
    assert!(!is_date_blocked(dt("2024-01-12T00:00"), Some(dt("2024-01-11T20:00"))));
}

#[test]
fn nothing_is_blocked_without_a_minimum() {
    assert!(!is_date_blocked(d("1999-01-01"), None::<NaiveDate>));
}

#[test]
fn mixes_dates_and_date_times() {
    assert!(is_date_blocked(dt("2024-01-10T12:00"), Some(d("2024-01-11"))));
    assert!(!is_date_blocked(d("2024-01-11"), Some(dt("2024-01-11T23:00"))));

    let utc = Utc.with_ymd_and_hms(2024, 1, 10, 22, 0, 0).unwrap();
    assert!(is_date_blocked(utc, Some(d("2024-01-11"))));
}

#[test]
fn disabled_days_builds_a_picker_predicate() {
    let predicate = disabled_days::<NaiveDateTime, NaiveDate>(Some(d("2024-02-03")))
        .expect("a minimum date yields a predicate");

    assert!(predicate(dt("2024-02-02T23:59")));
    assert!(!predicate(dt("2024-02-03T00:00")));
    assert!(!predicate(dt("2024-03-01T09:30")));
}

#[test]
fn disabled_days_is_absent_without_a_minimum() {
    assert!(disabled_days::<NaiveDate, NaiveDate>(None).is_none());
}

#[test]
fn parse_date_rejects_garbage_quietly() {
    assert_eq!(parse_date("2024-02-29"), Some(d("2024-02-29")));
    assert_eq!(parse_date(" 2024-02-29 "), Some(d("2024-02-29")));
    assert_eq!(parse_date("2023-02-29"), None);
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("29/02/2024"), None);
    assert_eq!(parse_date("2024-1-5"), None);
    assert_eq!(parse_date("2024-01-5"), None);
    assert_eq!(parse_date("+2024-01-05"), None);
    assert_eq!(parse_date("24-01-05"), None);
    assert_eq!(parse_date("2024-01-05T09:30"), Some(d("2024-01-05")));
}
