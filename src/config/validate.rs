// src/config/validate.rs

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::config::model::{ProjectFile, RawProjectFile};
use crate::constraint::dates::parse_date;
use crate::errors::{Result, WorkdepsError};
use crate::types::WorkId;

impl TryFrom<RawProjectFile> for ProjectFile {
    type Error = WorkdepsError;

    fn try_from(raw: RawProjectFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_project(&raw)?;
        Ok(ProjectFile::new_unchecked(
            raw.config,
            raw.grid,
            raw.work,
            raw.dependency,
        ))
    }
}

/// Semantic checks on a freshly deserialized project.
///
/// Rejected:
/// - no works, duplicate work or dependency ids
/// - non-positive `cell_width` / `row_height`
/// - unparseable or inverted window bounds
/// - self-dependencies and dependency cycles
///
/// Only warned about (the engines skip these silently):
/// - dependencies naming works that are not in the project
/// - malformed work date strings
pub fn validate_raw_project(cfg: &RawProjectFile) -> Result<()> {
    ensure_has_works(cfg)?;
    validate_layout(cfg)?;
    validate_works(cfg)?;
    validate_dependencies(cfg)?;
    validate_acyclic(cfg)?;
    Ok(())
}

fn ensure_has_works(cfg: &RawProjectFile) -> Result<()> {
    if cfg.work.is_empty() {
        return Err(WorkdepsError::ConfigError(
            "project must contain at least one [[work]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_layout(cfg: &RawProjectFile) -> Result<()> {
    if !(cfg.config.cell_width > 0.0) {
        return Err(WorkdepsError::ConfigError(format!(
            "[config].cell_width must be > 0 (got {})",
            cfg.config.cell_width
        )));
    }

    if !(cfg.grid.row_height > 0.0) {
        return Err(WorkdepsError::ConfigError(format!(
            "[grid].row_height must be > 0 (got {})",
            cfg.grid.row_height
        )));
    }

    let start = parse_window_bound("window_start", cfg.config.window_start.as_deref())?;
    let end = parse_window_bound("window_end", cfg.config.window_end.as_deref())?;

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(WorkdepsError::ConfigError(format!(
                "[config].window_end ({end}) is before window_start ({start})"
            )));
        }
    }

    Ok(())
}

fn parse_window_bound(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<chrono::NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) => parse_date(s).map(Some).ok_or_else(|| {
            WorkdepsError::ConfigError(format!(
                "[config].{field} is not a yyyy-MM-dd date: '{s}'"
            ))
        }),
    }
}

fn validate_works(cfg: &RawProjectFile) -> Result<()> {
    let mut seen: HashSet<WorkId> = HashSet::new();

    for work in cfg.work.iter() {
        if !seen.insert(work.id) {
            return Err(WorkdepsError::ConfigError(format!(
                "duplicate work id {}",
                work.id
            )));
        }

        for field in work.dates.malformed_fields() {
            warn!(work = work.id, field, "malformed date treated as absent");
        }
    }

    Ok(())
}

fn validate_dependencies(cfg: &RawProjectFile) -> Result<()> {
    let works: HashSet<WorkId> = cfg.work.iter().map(|w| w.id).collect();
    let mut seen: HashSet<i64> = HashSet::new();

    for dep in cfg.dependency.iter() {
        if !seen.insert(dep.id) {
            return Err(WorkdepsError::ConfigError(format!(
                "duplicate dependency id {}",
                dep.id
            )));
        }

        if dep.work_id == dep.depends_on_work_id {
            return Err(WorkdepsError::ConfigError(format!(
                "dependency {}: work {} cannot depend on itself",
                dep.id, dep.work_id
            )));
        }

        for id in [dep.work_id, dep.depends_on_work_id] {
            if !works.contains(&id) {
                warn!(
                    dependency = dep.id,
                    work = id,
                    "dependency references unknown work; it will not be drawn"
                );
            }
        }
    }

    Ok(())
}

fn validate_acyclic(cfg: &RawProjectFile) -> Result<()> {
    // Edge direction: predecessor -> successor.
    let mut graph: DiGraphMap<WorkId, ()> = DiGraphMap::new();

    for work in cfg.work.iter() {
        graph.add_node(work.id);
    }

    for dep in cfg.dependency.iter() {
        graph.add_edge(dep.depends_on_work_id, dep.work_id, ());
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(WorkdepsError::DependencyCycle(format!(
            "cycle detected in work dependencies involving work {}",
            cycle.node_id()
        ))),
    }
}
