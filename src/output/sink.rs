// src/output/sink.rs

//! Pluggable overlay sink abstraction.
//!
//! The runtime talks to an `OverlaySink` instead of writing files directly.
//! Production uses [`FileOverlaySink`] or [`StdoutOverlaySink`]; tests can
//! provide their own sink that records what was published.

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use tracing::info;

use crate::engine::Overlay;
use crate::errors::Result;
use crate::fs::FileSystem;

/// Trait abstracting where rendered overlays go.
pub trait OverlaySink: Send {
    fn publish(
        &mut self,
        overlay: Overlay,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Writes each overlay to a file, replacing the previous one.
#[derive(Debug)]
pub struct FileOverlaySink {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileOverlaySink {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl OverlaySink for FileOverlaySink {
    fn publish(
        &mut self,
        overlay: Overlay,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let fs = Arc::clone(&self.fs);
        let path = self.path.clone();

        Box::pin(async move {
            let svg = overlay.svg;
            tokio::task::spawn_blocking(move || fs.write(&path, svg.as_bytes()))
                .await
                .map_err(anyhow::Error::from)??;
            info!(
                path = ?self.path,
                sequence = overlay.sequence,
                arrows = overlay.arrows.len(),
                "overlay written"
            );
            Ok(())
        })
    }
}

/// Prints each overlay to stdout.
#[derive(Debug, Default)]
pub struct StdoutOverlaySink;

impl OverlaySink for StdoutOverlaySink {
    fn publish(
        &mut self,
        overlay: Overlay,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let mut stdout = std::io::stdout();
            stdout.write_all(overlay.svg.as_bytes())?;
            stdout.flush()?;
            Ok(())
        })
    }
}
