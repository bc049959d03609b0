use std::sync::mpsc;
use std::time::Duration;

use suggest_logging::suggest_trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::{EngineEvent, Generation};

/// The one debounce timer of the search box.
///
/// Holds at most one scheduled task; scheduling again aborts the previous one
/// before arming the new one.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer; `DebounceElapsed { generation }` is sent after `delay`.
    pub fn schedule(
        &mut self,
        runtime: &Handle,
        generation: Generation,
        delay: Duration,
        event_tx: mpsc::Sender<EngineEvent>,
    ) {
        self.cancel();
        suggest_trace!("Debounce armed generation={} delay={:?}", generation, delay);
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = event_tx.send(EngineEvent::DebounceElapsed { generation });
        }));
    }

    /// Aborts the scheduled task. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
