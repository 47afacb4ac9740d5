// src/constraint/check.rs

use std::fmt;

use chrono::NaiveDate;

use crate::constraint::dates::WorkDateInfo;
use crate::constraint::evaluator::{
    compute_min_end_date, compute_min_start_date, DependencyConstraint,
};
use crate::types::WorkId;

/// Which recorded date of a work broke its dependency bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    ActualStart,
    ActualEnd,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateField::ActualStart => f.write_str("actual_start"),
            DateField::ActualEnd => f.write_str("actual_end"),
        }
    }
}

/// A recorded actual date that lies before the earliest permissible one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleViolation {
    pub work_id: WorkId,
    pub field: DateField,
    pub actual: NaiveDate,
    pub min_allowed: NaiveDate,
}

impl fmt::Display for ScheduleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "work {}: {} {} is before the earliest allowed {}",
            self.work_id, self.field, self.actual, self.min_allowed
        )
    }
}

/// Earliest permissible actual dates for one work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinDates {
    pub min_start: Option<NaiveDate>,
    pub min_end: Option<NaiveDate>,
}

impl MinDates {
    /// Evaluate both bounds for `work` against its incoming constraints.
    pub fn evaluate(work: &WorkDateInfo, constraints: &[DependencyConstraint]) -> Self {
        Self {
            min_start: compute_min_start_date(constraints),
            min_end: compute_min_end_date(constraints, work.actual_start_date),
        }
    }
}

/// Compare the work's recorded actual dates with its bounds.
///
/// Planned dates are never reported; only actual dates are restricted.
pub fn check_work(
    work: &WorkDateInfo,
    constraints: &[DependencyConstraint],
) -> Vec<ScheduleViolation> {
    let bounds = MinDates::evaluate(work, constraints);
    let mut violations = Vec::new();

    let checks = [
        (DateField::ActualStart, work.actual_start_date, bounds.min_start),
        (DateField::ActualEnd, work.actual_end_date, bounds.min_end),
    ];

    for (field, actual, min_allowed) in checks {
        if let (Some(actual), Some(min_allowed)) = (actual, min_allowed) {
            if actual < min_allowed {
                violations.push(ScheduleViolation {
                    work_id: work.work_id,
                    field,
                    actual,
                    min_allowed,
                });
            }
        }
    }

    violations
}
