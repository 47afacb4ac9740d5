// src/constraint/picker.rs

//! Day-disabling predicates for date-selection controls.

use crate::constraint::dates::CalendarDay;

/// `true` iff `min_allowed` is set and `date` falls on an earlier calendar
/// day. Time of day is ignored on both sides.
pub fn is_date_blocked<D, M>(date: D, min_allowed: Option<M>) -> bool
where
    D: CalendarDay,
    M: CalendarDay,
{
    match min_allowed {
        Some(min) => date.calendar_day() < min.calendar_day(),
        None => false,
    }
}

/// Build the "day disabled" predicate a date picker expects.
///
/// Returns `None` when nothing is restricted, so the picker can leave its
/// predicate slot empty instead of calling a closure that always says no.
pub fn disabled_days<D, M>(min_allowed: Option<M>) -> Option<impl Fn(D) -> bool>
where
    D: CalendarDay,
    M: CalendarDay + Copy,
{
    let min = min_allowed?;
    Some(move |date: D| is_date_blocked(date, Some(min)))
}
