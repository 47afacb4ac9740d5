use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use workdeps::engine::Overlay;
use workdeps::errors::Result;
use workdeps::output::OverlaySink;

/// A fake sink that records every overlay it is asked to publish.
#[derive(Clone, Default)]
pub struct RecordingSink {
    published: Arc<Mutex<Vec<Overlay>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded overlays, usable after the sink moved
    /// into a runtime.
    pub fn handle(&self) -> Arc<Mutex<Vec<Overlay>>> {
        Arc::clone(&self.published)
    }
}

impl OverlaySink for RecordingSink {
    fn publish(
        &mut self,
        overlay: Overlay,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let published = Arc::clone(&self.published);

        Box::pin(async move {
            published.lock().unwrap().push(overlay);
            Ok(())
        })
    }
}
