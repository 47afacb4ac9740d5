// src/layout/positions.rs

//! Row geometry capture.
//!
//! A [`GridSnapshot`] is what the schedule grid exposes at one instant: each
//! row's bounding box in viewport coordinates plus the raw date strings it
//! is tagged with. [`capture_positions`] turns that into content-space
//! [`WorkPosition`]s for the current pass.

use std::collections::BTreeMap;

use tracing::trace;

use crate::config::model::ProjectFile;
use crate::constraint::dates::{parse_opt_date, RawWorkDates};
use crate::layout::axis::TimeAxis;
use crate::types::WorkId;

/// Geometry of the scrollable container hosting the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    /// Top of the container in viewport coordinates.
    pub top: f64,
    pub scroll_top: f64,
    /// Full scrollable content size.
    pub scroll_width: f64,
    pub scroll_height: f64,
    /// Offset of the first time unit from the content's left edge.
    pub timeline_left: f64,
}

/// One rendered row of the schedule grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub work_id: WorkId,
    pub dates: RawWorkDates,
    /// Top of the row in viewport coordinates.
    pub top: f64,
    pub height: f64,
}

/// The grid as observed at one instant.
///
/// `container` is `None` while the grid is not mounted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridSnapshot {
    pub container: Option<ContainerGeometry>,
    pub rows: Vec<GridRow>,
}

impl GridSnapshot {
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Lay the project's works out as consecutive rows, the way the grid
    /// renders them, scrolled by `[grid].scroll_top`.
    pub fn from_project(project: &ProjectFile, axis: &TimeAxis) -> Self {
        let grid = &project.grid;
        let container_top = 0.0;

        let rows: Vec<GridRow> = project
            .work
            .iter()
            .enumerate()
            .map(|(idx, work)| GridRow {
                work_id: work.id,
                dates: work.dates.clone(),
                top: container_top + grid.header_height + idx as f64 * grid.row_height
                    - grid.scroll_top,
                height: grid.row_height,
            })
            .collect();

        let container = ContainerGeometry {
            top: container_top,
            scroll_top: grid.scroll_top,
            scroll_width: project.config.timeline_left + axis.width(),
            scroll_height: grid.header_height + rows.len() as f64 * grid.row_height,
            timeline_left: project.config.timeline_left,
        };

        Self {
            container: Some(container),
            rows,
        }
    }

    /// The same grid scrolled to a new vertical offset.
    pub fn scrolled_to(&self, scroll_top: f64) -> Self {
        let Some(container) = self.container else {
            return self.clone();
        };
        let delta = scroll_top - container.scroll_top;

        Self {
            container: Some(ContainerGeometry {
                scroll_top,
                ..container
            }),
            rows: self
                .rows
                .iter()
                .map(|row| GridRow {
                    top: row.top - delta,
                    ..row.clone()
                })
                .collect(),
        }
    }
}

/// Where a work's row and date markers sit in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkPosition {
    pub work_id: WorkId,
    pub top: f64,
    pub height: f64,
    pub plan_start_x: Option<f64>,
    pub plan_end_x: Option<f64>,
    pub actual_start_x: Option<f64>,
    pub actual_end_x: Option<f64>,
}

impl WorkPosition {
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn start_x(&self) -> Option<f64> {
        self.actual_start_x.or(self.plan_start_x)
    }

    pub fn end_x(&self) -> Option<f64> {
        self.actual_end_x.or(self.plan_end_x)
    }
}

pub type PositionMap = BTreeMap<WorkId, WorkPosition>;

/// Capture the position of every row in `snapshot`.
///
/// Returns `None` when the container is not mounted; the caller skips the
/// pass and keeps whatever it drew before.
pub fn capture_positions(snapshot: &GridSnapshot, axis: &TimeAxis) -> Option<PositionMap> {
    let container = snapshot.container?;

    let to_x = |raw: &Option<String>| {
        axis.x_of(parse_opt_date(raw.as_deref()))
            .map(|x| x + container.timeline_left)
    };

    let positions = snapshot
        .rows
        .iter()
        .map(|row| {
            let position = WorkPosition {
                work_id: row.work_id,
                top: row.top - container.top + container.scroll_top,
                height: row.height,
                plan_start_x: to_x(&row.dates.plan_start),
                plan_end_x: to_x(&row.dates.plan_end),
                actual_start_x: to_x(&row.dates.actual_start),
                actual_end_x: to_x(&row.dates.actual_end),
            };
            trace!(?position, "captured row");
            (row.work_id, position)
        })
        .collect();

    Some(positions)
}
