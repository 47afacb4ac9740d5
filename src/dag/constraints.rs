// src/dag/constraints.rs

use std::collections::HashMap;

use tracing::debug;

use crate::constraint::check::{check_work, MinDates, ScheduleViolation};
use crate::constraint::dates::WorkDateInfo;
use crate::constraint::evaluator::DependencyConstraint;
use crate::dag::graph::DependencyGraph;
use crate::types::WorkId;

/// Date snapshots keyed by work id.
pub type DateIndex = HashMap<WorkId, WorkDateInfo>;

pub fn index_dates(infos: impl IntoIterator<Item = WorkDateInfo>) -> DateIndex {
    infos.into_iter().map(|info| (info.work_id, info)).collect()
}

/// Join `work`'s incoming records with the predecessors' dates.
///
/// A predecessor without date info still yields a constraint, with every
/// date absent, so it contributes no bound.
pub fn constraints_for(
    graph: &DependencyGraph,
    work: WorkId,
    dates: &DateIndex,
) -> Vec<DependencyConstraint> {
    graph
        .dependencies_of(work)
        .map(|record| {
            let predecessor = record.depends_on_work_id;
            let predecessor_dates = dates.get(&predecessor).copied().unwrap_or_else(|| {
                debug!(work, predecessor, "no dates for predecessor");
                WorkDateInfo::empty(predecessor)
            });

            DependencyConstraint {
                dependency_type: record.dependency_type,
                lag_days: record.lag_days,
                predecessor_work_id: predecessor,
                predecessor_dates,
            }
        })
        .collect()
}

/// Evaluation result for one work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkReport {
    pub work_id: WorkId,
    pub constraint_count: usize,
    pub bounds: MinDates,
    pub violations: Vec<ScheduleViolation>,
}

/// Evaluate a single work against the graph.
pub fn evaluate_work(graph: &DependencyGraph, work: &WorkDateInfo, dates: &DateIndex) -> WorkReport {
    let constraints = constraints_for(graph, work.work_id, dates);
    WorkReport {
        work_id: work.work_id,
        constraint_count: constraints.len(),
        bounds: MinDates::evaluate(work, &constraints),
        violations: check_work(work, &constraints),
    }
}

/// Evaluate every work in `works`, preserving their order.
pub fn evaluate_all(graph: &DependencyGraph, works: &[WorkDateInfo]) -> Vec<WorkReport> {
    let dates = index_dates(works.iter().copied());
    works
        .iter()
        .map(|work| evaluate_work(graph, work, &dates))
        .collect()
}
