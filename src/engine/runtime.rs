// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::output::OverlaySink;

use super::core::LayoutCore;
use super::{LayoutCommand, LayoutEvent};

/// Drives the layout core in response to `LayoutEvent`s and hands rendered
/// overlays to an `OverlaySink`.
///
/// Events are drained one at a time from a single channel, so passes never
/// overlap and the latest pass always wins.
pub struct Runtime<S: OverlaySink> {
    core: LayoutCore,
    event_rx: mpsc::Receiver<LayoutEvent>,
    sink: S,
}

impl<S: OverlaySink> fmt::Debug for Runtime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: OverlaySink> Runtime<S> {
    pub fn new(core: LayoutCore, event_rx: mpsc::Receiver<LayoutEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Main event loop.
    ///
    /// Returns the core once the loop ends, so callers can inspect the final
    /// layout state.
    pub async fn run(mut self) -> Result<LayoutCore> {
        info!("workdeps layout runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("layout event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.core.step(event);

            for command in step.commands {
                self.execute_command(command).await?;
            }

            if !step.keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(self.core)
    }

    async fn execute_command(&mut self, command: LayoutCommand) -> Result<()> {
        match command {
            LayoutCommand::Render(overlay) => {
                debug!(sequence = overlay.sequence, "publishing overlay");
                self.sink.publish(overlay).await?;
            }
            LayoutCommand::RequestExit => {
                debug!("core issued RequestExit command");
            }
        }
        Ok(())
    }
}
