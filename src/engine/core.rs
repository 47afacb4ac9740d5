// src/engine/core.rs

//! Pure layout state machine.
//!
//! [`LayoutCore`] consumes [`LayoutEvent`]s and produces:
//! - updated layout state (graph, axis, last grid snapshot, positions)
//! - a list of commands for the IO shell (publish an overlay, exit)
//!
//! It has **no** channels, no Tokio types, and does not perform any IO.

use chrono::NaiveDate;

use crate::config::model::ProjectFile;
use crate::dag::DependencyGraph;
use crate::engine::event_handlers::{
    handle_dependencies_change, handle_grid_change, handle_project_reload,
    handle_view_mode_change, handle_window_change, recompute, LayoutStep,
};
use crate::engine::{LayoutEvent, LayoutOptions};
use crate::layout::{ArrowPath, GridSnapshot, PositionMap, TimeAxis};
use crate::types::ViewMode;

/// Inputs that determine the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSettings {
    pub view_mode: ViewMode,
    pub cell_width: f64,
    /// Inclusive visible window; no window means an empty axis.
    pub window: Option<(NaiveDate, NaiveDate)>,
}

impl AxisSettings {
    pub fn from_project(project: &ProjectFile) -> Self {
        Self {
            view_mode: project.config.view_mode,
            cell_width: project.config.cell_width,
            window: project.time_window(),
        }
    }

    pub fn build_axis(&self) -> TimeAxis {
        match self.window {
            Some((start, end)) => TimeAxis::build(start, end, self.view_mode, self.cell_width),
            None => TimeAxis::empty(self.view_mode, self.cell_width),
        }
    }
}

/// A rendered overlay handed to the IO shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Sequence number of this overlay, starting at 1.
    pub sequence: u64,
    pub svg: String,
    pub arrows: Vec<ArrowPath>,
}

/// State owned by the core. Event handlers mutate it in place.
#[derive(Debug)]
pub(crate) struct LayoutState {
    pub(crate) graph: DependencyGraph,
    pub(crate) settings: AxisSettings,
    pub(crate) axis: TimeAxis,
    pub(crate) snapshot: GridSnapshot,
    pub(crate) positions: PositionMap,
    pub(crate) last_svg: Option<String>,
    pub(crate) published: u64,
}

impl LayoutState {
    pub(crate) fn new(
        graph: DependencyGraph,
        settings: AxisSettings,
        snapshot: GridSnapshot,
    ) -> Self {
        let axis = settings.build_axis();
        Self {
            graph,
            settings,
            axis,
            snapshot,
            positions: PositionMap::new(),
            last_svg: None,
            published: 0,
        }
    }

    pub(crate) fn from_project(project: &ProjectFile) -> Self {
        let settings = AxisSettings::from_project(project);
        let axis = settings.build_axis();
        let snapshot = GridSnapshot::from_project(project, &axis);
        Self::new(DependencyGraph::from_project(project), settings, snapshot)
    }

    pub(crate) fn rebuild_axis(&mut self) {
        self.axis = self.settings.build_axis();
    }

    /// Size of the overlay: the full scrollable content area, widened to the
    /// axis if the container reports less.
    pub(crate) fn content_size(&self) -> (f64, f64) {
        match self.snapshot.container {
            Some(container) => (
                container
                    .scroll_width
                    .max(container.timeline_left + self.axis.width()),
                container.scroll_height,
            ),
            None => (0.0, 0.0),
        }
    }
}

/// Pure core of the layout engine.
#[derive(Debug)]
pub struct LayoutCore {
    state: LayoutState,
    options: LayoutOptions,
}

impl LayoutCore {
    pub fn new(
        graph: DependencyGraph,
        settings: AxisSettings,
        snapshot: GridSnapshot,
        options: LayoutOptions,
    ) -> Self {
        Self {
            state: LayoutState::new(graph, settings, snapshot),
            options,
        }
    }

    pub fn from_project(project: &ProjectFile, options: LayoutOptions) -> Self {
        Self {
            state: LayoutState::from_project(project),
            options,
        }
    }

    /// Positions captured by the most recent successful pass.
    pub fn positions(&self) -> &PositionMap {
        &self.state.positions
    }

    pub fn axis(&self) -> &TimeAxis {
        &self.state.axis
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.state.graph
    }

    /// Last overlay published, if any.
    pub fn last_svg(&self) -> Option<&str> {
        self.state.last_svg.as_deref()
    }

    /// Run one layout pass over the current state without any new input.
    pub fn recompute(&mut self) -> LayoutStep {
        recompute(&mut self.state, &self.options)
    }

    /// Handle a single event, updating state and returning the resulting
    /// commands for the IO shell.
    pub fn step(&mut self, event: LayoutEvent) -> LayoutStep {
        match event {
            LayoutEvent::GridChanged { snapshot, trigger } => {
                handle_grid_change(&mut self.state, &self.options, snapshot, trigger)
            }
            LayoutEvent::DependenciesChanged(records) => {
                handle_dependencies_change(&mut self.state, &self.options, records)
            }
            LayoutEvent::WindowChanged { start, end } => {
                handle_window_change(&mut self.state, &self.options, start, end)
            }
            LayoutEvent::ViewModeChanged(mode) => {
                handle_view_mode_change(&mut self.state, &self.options, mode)
            }
            LayoutEvent::ProjectReloaded(project) => {
                handle_project_reload(&mut self.state, &self.options, &project)
            }
            LayoutEvent::ShutdownRequested => LayoutStep {
                commands: Vec::new(),
                keep_running: false,
            },
        }
    }
}
