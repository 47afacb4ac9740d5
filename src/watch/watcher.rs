// src/watch/watcher.rs

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::LayoutEvent;
use crate::fs::FileSystem;
use crate::watch::event_handler::process_project_change;
use crate::watch::hash::ContentTracker;

/// Handle for the project file watcher.
///
/// Dropping this handle stops watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Whether a notify event concerns the project file.
pub fn event_touches(event: &Event, project_path: &Path) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    let Some(name) = project_path.file_name() else {
        return false;
    };
    event.paths.iter().any(|p| p.file_name() == Some(name))
}

/// Watch `project_path` and send `LayoutEvent::ProjectReloaded` whenever its
/// contents change to a valid project.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by rename are still picked up. `tracker` should be seeded with
/// the contents that were loaded at startup.
pub fn spawn_project_watcher(
    fs: Arc<dyn FileSystem>,
    project_path: impl Into<PathBuf>,
    tracker: ContentTracker,
    runtime_tx: mpsc::Sender<LayoutEvent>,
) -> Result<WatcherHandle> {
    let project_path = project_path.into();
    let project_path = fs
        .canonicalize(&project_path)
        .unwrap_or_else(|_| project_path.clone());
    let watch_dir = match project_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("workdeps: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("workdeps: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    info!("watching project file {:?}", project_path);

    tokio::spawn(async move {
        let mut tracker = tracker;

        while let Some(event) = event_rx.recv().await {
            if !event_touches(&event, &project_path) {
                continue;
            }
            debug!(?event, "project file event");

            if let Some(layout_event) =
                process_project_change(fs.as_ref(), &project_path, &mut tracker)
            {
                if runtime_tx.send(layout_event).await.is_err() {
                    debug!("layout runtime gone; stopping watcher loop");
                    break;
                }
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}
