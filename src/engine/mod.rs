// src/engine/mod.rs

//! Event-driven layout recomputation.
//!
//! Anything that can move an arrow arrives as a [`LayoutEvent`]:
//! - grid resize, row mutation or scroll (with a fresh grid snapshot)
//! - a new dependency list
//! - a new visible time window or view mode
//! - a reloaded project file
//! - shutdown
//!
//! Each event triggers one full synchronous pass. The pure state machine
//! lives in [`core`]; the async/IO shell that reads events from a channel
//! and publishes overlays is implemented in [`runtime`].

use chrono::NaiveDate;

use crate::config::model::{DependencyRecord, ProjectFile};
use crate::layout::GridSnapshot;
use crate::types::ViewMode;

/// What the grid observer saw change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTrigger {
    /// The container was resized.
    Resize,
    /// Rows were added, removed or had their attributes changed.
    Mutation,
    /// The container scrolled.
    Scroll,
}

/// Events flowing into the layout runtime.
#[derive(Debug, Clone)]
pub enum LayoutEvent {
    /// The grid geometry changed; `snapshot` is the grid as it is now.
    GridChanged {
        snapshot: GridSnapshot,
        trigger: LayoutTrigger,
    },
    /// The dependency list was replaced.
    DependenciesChanged(Vec<DependencyRecord>),
    /// The visible time window moved.
    WindowChanged { start: NaiveDate, end: NaiveDate },
    /// Switched between day and week columns.
    ViewModeChanged(ViewMode),
    /// The whole project snapshot was reloaded (e.g. file changed on disk).
    ProjectReloaded(Box<ProjectFile>),
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

/// Options shared by the core and the async shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    /// Stop after the first layout pass (used when not watching).
    pub exit_after_pass: bool,
}

pub mod core;
pub mod event_handlers;
pub mod runtime;

pub use self::core::{AxisSettings, LayoutCore, Overlay};
pub use event_handlers::{LayoutCommand, LayoutStep};
pub use runtime::Runtime;
