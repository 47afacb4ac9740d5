// src/constraint/mod.rs

//! Dependency date constraints.
//!
//! - [`dates`] parses the data layer's date strings and derives effective
//!   dates.
//! - [`evaluator`] computes the earliest permissible actual start/end of a
//!   work from its incoming dependencies.
//! - [`picker`] turns a minimum date into a date-picker predicate.
//! - [`check`] reports recorded actual dates that break their bounds.
//!
//! Nothing in here fails: unknown or malformed inputs just contribute no
//! bound.

pub mod check;
pub mod dates;
pub mod evaluator;
pub mod picker;

pub use check::{check_work, DateField, MinDates, ScheduleViolation};
pub use dates::{parse_date, CalendarDay, RawWorkDates, WorkDateInfo};
pub use evaluator::{compute_min_end_date, compute_min_start_date, DependencyConstraint};
pub use picker::{disabled_days, is_date_blocked};
