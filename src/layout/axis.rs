// src/layout/axis.rs

//! Time axis construction and date-to-pixel mapping.

use chrono::{Datelike, NaiveDate};

use crate::constraint::dates::add_days;
use crate::types::ViewMode;

/// First day (Monday) of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = i64::from(date.weekday().num_days_from_monday());
    add_days(date, -back).unwrap_or(date)
}

/// Horizontal centre of `date` on the axis, relative to the first unit.
///
/// - Day mode: centre of the matching day cell. If no unit equals the date,
///   the day offset from the first unit is used as the column index when it
///   is in range. This assumes the axis has no gaps.
/// - Week mode: the week column containing the date, plus the centre of the
///   date's weekday within that column.
///
/// `None` for an absent date or one outside the window; the caller must not
/// draw that endpoint.
pub fn x_position_of(
    date: Option<NaiveDate>,
    time_units: &[NaiveDate],
    cell_width: f64,
    view_mode: ViewMode,
) -> Option<f64> {
    let date = date?;
    let first = *time_units.first()?;

    match view_mode {
        ViewMode::Day => {
            let index = match time_units.iter().position(|unit| *unit == date) {
                Some(index) => index,
                None => {
                    let offset = (date - first).num_days();
                    if offset < 0 || offset >= time_units.len() as i64 {
                        return None;
                    }
                    offset as usize
                }
            };
            Some(index as f64 * cell_width + cell_width / 2.0)
        }
        ViewMode::Week => {
            let bucket = week_start(date);
            let index = time_units
                .iter()
                .position(|unit| week_start(*unit) == bucket)?;
            let days_into_week = f64::from(date.weekday().num_days_from_monday());
            let fraction = (days_into_week + 0.5) / 7.0;
            Some(index as f64 * cell_width + fraction * cell_width)
        }
    }
}

/// The ordered day or week buckets spanning the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    units: Vec<NaiveDate>,
    cell_width: f64,
    view_mode: ViewMode,
}

impl TimeAxis {
    /// Build the axis for `[start, end]`.
    ///
    /// Week mode starts at the Monday on or before `start` and emits one
    /// Monday per week up to the week containing `end`.
    pub fn build(start: NaiveDate, end: NaiveDate, view_mode: ViewMode, cell_width: f64) -> Self {
        let (first, step) = match view_mode {
            ViewMode::Day => (start, 1),
            ViewMode::Week => (week_start(start), 7),
        };

        let mut units = Vec::new();
        let mut current = Some(first);
        while let Some(unit) = current {
            if unit > end {
                break;
            }
            units.push(unit);
            current = add_days(unit, step);
        }

        Self {
            units,
            cell_width,
            view_mode,
        }
    }

    /// An axis with no units; every lookup on it yields `None`.
    pub fn empty(view_mode: ViewMode, cell_width: f64) -> Self {
        Self {
            units: Vec::new(),
            cell_width,
            view_mode,
        }
    }

    pub fn units(&self) -> &[NaiveDate] {
        &self.units
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Total pixel width of all units.
    pub fn width(&self) -> f64 {
        self.units.len() as f64 * self.cell_width
    }

    pub fn x_of(&self, date: Option<NaiveDate>) -> Option<f64> {
        x_position_of(date, &self.units, self.cell_width, self.view_mode)
    }
}
