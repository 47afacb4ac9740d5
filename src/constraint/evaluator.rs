// src/constraint/evaluator.rs

//! Minimum permissible actual dates for a work.
//!
//! Every incoming dependency is an independent lower bound, so the binding
//! bound is the latest candidate over all constraints. Kinds never cross
//! over: FS/SS only feed the start bound, FF/SF only the end bound.

use chrono::NaiveDate;

use crate::constraint::dates::{add_days, WorkDateInfo};
use crate::types::{DependencyType, WorkId};

/// One incoming edge of a successor work, joined with the predecessor's dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyConstraint {
    pub dependency_type: DependencyType,
    pub lag_days: i32,
    pub predecessor_work_id: WorkId,
    pub predecessor_dates: WorkDateInfo,
}

impl DependencyConstraint {
    /// Lower bound this constraint puts on the successor's start, if any.
    pub fn start_candidate(&self) -> Option<NaiveDate> {
        let lag = i64::from(self.lag_days);
        match self.dependency_type {
            DependencyType::FinishStart => self
                .predecessor_dates
                .effective_end()
                .and_then(|end| add_days(end, 1 + lag)),
            DependencyType::StartStart => self
                .predecessor_dates
                .effective_start()
                .and_then(|start| add_days(start, lag)),
            DependencyType::FinishFinish | DependencyType::StartFinish => None,
        }
    }

    /// Lower bound this constraint puts on the successor's end, if any.
    pub fn end_candidate(&self) -> Option<NaiveDate> {
        let lag = i64::from(self.lag_days);
        match self.dependency_type {
            DependencyType::FinishFinish => self
                .predecessor_dates
                .effective_end()
                .and_then(|end| add_days(end, 1 + lag)),
            DependencyType::StartFinish => self
                .predecessor_dates
                .effective_start()
                .and_then(|start| add_days(start, lag)),
            DependencyType::FinishStart | DependencyType::StartStart => None,
        }
    }
}

/// Earliest actual start date allowed by `constraints`.
///
/// `None` when the slice is empty or no constraint yields a candidate.
pub fn compute_min_start_date(constraints: &[DependencyConstraint]) -> Option<NaiveDate> {
    constraints
        .iter()
        .filter_map(DependencyConstraint::start_candidate)
        .max()
}

/// Earliest actual end date allowed by `constraints`.
///
/// The work's own `actual_start_date` also bounds its end: when it is later
/// than the dependency bound it wins. `None` only when both are absent.
pub fn compute_min_end_date(
    constraints: &[DependencyConstraint],
    actual_start_date: Option<NaiveDate>,
) -> Option<NaiveDate> {
    let dep_min = constraints
        .iter()
        .filter_map(DependencyConstraint::end_candidate)
        .max();

    match (dep_min, actual_start_date) {
        (Some(dep), Some(start)) => Some(dep.max(start)),
        (dep, start) => dep.or(start),
    }
}
