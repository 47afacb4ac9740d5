// src/constraint/dates.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde::Deserialize;
use tracing::trace;

use crate::types::WorkId;

/// Format used by the data layer for every date string.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `yyyy-MM-dd` date.
///
/// A trailing time component (`2024-01-10T08:00:00`, `2024-01-10 08:00`) is
/// ignored. Anything unparseable yields `None`; callers treat that exactly
/// like an absent date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let day_part = match raw.char_indices().nth(10) {
        Some((idx, 'T')) | Some((idx, ' ')) => &raw[..idx],
        _ => raw,
    };

    if !is_iso_day_shape(day_part) {
        trace!(raw, "date not shaped yyyy-MM-dd; treated as absent");
        return None;
    }

    match NaiveDate::parse_from_str(day_part, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            trace!(raw, %err, "unparseable date treated as absent");
            None
        }
    }
}

/// Exactly `DDDD-DD-DD`. chrono alone also accepts signs, short years and
/// unpadded fields.
fn is_iso_day_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse an optional raw date string.
pub fn parse_opt_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date)
}

/// Add a signed number of calendar days. Leaving chrono's range gives `None`.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// Anything that can be reduced to a calendar day.
///
/// Date pickers hand over date-times; the evaluator works on plain dates.
/// Comparisons in this crate always happen on the day returned here.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// The four date strings of a work exactly as the data layer stores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawWorkDates {
    #[serde(default)]
    pub plan_start: Option<String>,
    #[serde(default)]
    pub plan_end: Option<String>,
    #[serde(default)]
    pub actual_start: Option<String>,
    #[serde(default)]
    pub actual_end: Option<String>,
}

impl RawWorkDates {
    /// Names of the fields whose value is present but not a valid date.
    pub fn malformed_fields(&self) -> Vec<&'static str> {
        [
            ("plan_start", &self.plan_start),
            ("plan_end", &self.plan_end),
            ("actual_start", &self.actual_start),
            ("actual_end", &self.actual_end),
        ]
        .into_iter()
        .filter(|(_, raw)| matches!(raw, Some(s) if parse_date(s).is_none()))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Parsed snapshot of one work's plan and actual dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDateInfo {
    pub work_id: WorkId,
    pub plan_start_date: Option<NaiveDate>,
    pub plan_end_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
}

impl WorkDateInfo {
    /// A snapshot with every date absent.
    pub fn empty(work_id: WorkId) -> Self {
        Self {
            work_id,
            plan_start_date: None,
            plan_end_date: None,
            actual_start_date: None,
            actual_end_date: None,
        }
    }

    /// Build from raw strings; malformed values become `None`.
    pub fn from_raw(work_id: WorkId, raw: &RawWorkDates) -> Self {
        Self {
            work_id,
            plan_start_date: parse_opt_date(raw.plan_start.as_deref()),
            plan_end_date: parse_opt_date(raw.plan_end.as_deref()),
            actual_start_date: parse_opt_date(raw.actual_start.as_deref()),
            actual_end_date: parse_opt_date(raw.actual_end.as_deref()),
        }
    }

    /// Actual start if recorded, else planned start.
    pub fn effective_start(&self) -> Option<NaiveDate> {
        self.actual_start_date.or(self.plan_start_date)
    }

    /// Actual end if recorded, else planned end.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.actual_end_date.or(self.plan_end_date)
    }
}
