#![allow(dead_code)]

pub use workdeps_test_utils::builders;
pub use workdeps_test_utils::init_tracing;

use chrono::{NaiveDate, NaiveDateTime};

/// `yyyy-MM-dd` → `NaiveDate`, panicking on bad input (tests only).
pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// `yyyy-MM-ddTHH:MM` → `NaiveDateTime`.
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}
