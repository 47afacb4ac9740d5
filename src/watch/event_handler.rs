// src/watch/event_handler.rs

use std::path::Path;

use tracing::{debug, warn};

use crate::config::loader::parse_project;
use crate::engine::LayoutEvent;
use crate::fs::FileSystem;
use crate::watch::hash::ContentTracker;

/// Turn a change of the project file into a reload event.
///
/// Returns `None` when the file cannot be read, its contents did not change,
/// or it no longer parses/validates. In the last case the previous layout
/// stays on screen until the file is fixed.
pub fn process_project_change(
    fs: &dyn FileSystem,
    project_path: &Path,
    tracker: &mut ContentTracker,
) -> Option<LayoutEvent> {
    let bytes = match fs.read(project_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(?project_path, %err, "project file not readable; ignoring change");
            return None;
        }
    };

    if !tracker.observe(&bytes) {
        return None;
    }

    let contents = String::from_utf8_lossy(&bytes);
    match parse_project(&contents) {
        Ok(project) => Some(LayoutEvent::ProjectReloaded(Box::new(project))),
        Err(err) => {
            warn!(?project_path, %err, "reloaded project is invalid; keeping previous layout");
            None
        }
    }
}
