// src/watch/mod.rs

//! Project file watching.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the project
//!   file.
//! - Content hashing so that repeated events for one save only reload once.
//! - Turning a changed, valid project into a `LayoutEvent::ProjectReloaded`.

pub mod event_handler;
pub mod hash;
pub mod watcher;

pub use event_handler::process_project_change;
pub use hash::{content_hash, ContentTracker};
pub use watcher::{event_touches, spawn_project_watcher, WatcherHandle};
