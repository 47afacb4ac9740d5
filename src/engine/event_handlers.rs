// src/engine/event_handlers.rs

//! Event handling logic for the layout core.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::model::{DependencyRecord, ProjectFile};
use crate::dag::DependencyGraph;
use crate::engine::core::{LayoutState, Overlay};
use crate::engine::{LayoutOptions, LayoutTrigger};
use crate::layout::{capture_positions, render_overlay, synthesize_arrows, GridSnapshot};
use crate::types::ViewMode;

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum LayoutCommand {
    /// Publish this overlay (it differs from the previous one).
    Render(Overlay),
    /// Request that the process exits (used when not watching).
    RequestExit,
}

/// Decision returned by the core after handling a single `LayoutEvent`.
#[derive(Debug, Clone)]
pub struct LayoutStep {
    pub commands: Vec<LayoutCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl LayoutStep {
    /// The overlay published by this step, if any.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.commands.iter().find_map(|command| match command {
            LayoutCommand::Render(overlay) => Some(overlay),
            LayoutCommand::RequestExit => None,
        })
    }
}

pub(crate) fn handle_grid_change(
    state: &mut LayoutState,
    options: &LayoutOptions,
    snapshot: GridSnapshot,
    trigger: LayoutTrigger,
) -> LayoutStep {
    debug!(?trigger, rows = snapshot.rows.len(), "grid changed");
    state.snapshot = snapshot;
    recompute(state, options)
}

pub(crate) fn handle_dependencies_change(
    state: &mut LayoutState,
    options: &LayoutOptions,
    records: Vec<DependencyRecord>,
) -> LayoutStep {
    debug!(count = records.len(), "dependency list replaced");
    state.graph = DependencyGraph::from_records(records);
    recompute(state, options)
}

pub(crate) fn handle_window_change(
    state: &mut LayoutState,
    options: &LayoutOptions,
    start: NaiveDate,
    end: NaiveDate,
) -> LayoutStep {
    debug!(%start, %end, "time window changed");
    state.settings.window = Some((start, end.max(start)));
    state.rebuild_axis();
    recompute(state, options)
}

pub(crate) fn handle_view_mode_change(
    state: &mut LayoutState,
    options: &LayoutOptions,
    mode: ViewMode,
) -> LayoutStep {
    debug!(?mode, "view mode changed");
    state.settings.view_mode = mode;
    state.rebuild_axis();
    recompute(state, options)
}

/// Replace graph, axis and grid with the reloaded project's.
///
/// The last published overlay is kept so that a reload which changes
/// nothing visible does not publish again.
pub(crate) fn handle_project_reload(
    state: &mut LayoutState,
    options: &LayoutOptions,
    project: &ProjectFile,
) -> LayoutStep {
    info!(
        works = project.work.len(),
        dependencies = project.dependency.len(),
        "project reloaded"
    );
    let last_svg = state.last_svg.take();
    let published = state.published;

    *state = LayoutState::from_project(project);
    state.last_svg = last_svg;
    state.published = published;

    recompute(state, options)
}

/// One full synchronous layout pass.
///
/// - Unmounted container: nothing is captured and previous positions stay.
/// - Otherwise positions are replaced wholesale, arrows re-routed, and the
///   overlay published only if it differs from the last one.
pub(crate) fn recompute(state: &mut LayoutState, options: &LayoutOptions) -> LayoutStep {
    let mut commands = Vec::new();

    match capture_positions(&state.snapshot, &state.axis) {
        None => {
            debug!("grid container not mounted; skipping layout pass");
        }
        Some(positions) => {
            let arrows = synthesize_arrows(state.graph.records(), &positions);
            state.positions = positions;

            let (width, height) = state.content_size();
            let svg = render_overlay(&arrows, width, height);

            if state.last_svg.as_deref() == Some(svg.as_str()) {
                debug!("overlay unchanged; not publishing");
            } else {
                state.published += 1;
                state.last_svg = Some(svg.clone());
                debug!(
                    sequence = state.published,
                    arrows = arrows.len(),
                    rows = state.positions.len(),
                    "overlay recomputed"
                );
                commands.push(LayoutCommand::Render(Overlay {
                    sequence: state.published,
                    svg,
                    arrows,
                }));
            }
        }
    }

    let mut keep_running = true;
    if options.exit_after_pass {
        keep_running = false;
        commands.push(LayoutCommand::RequestExit);
    }

    LayoutStep {
        commands,
        keep_running,
    }
}
