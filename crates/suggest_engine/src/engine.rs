use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use suggest_logging::{suggest_debug, suggest_warn};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::fetch::SuggestionFetcher;
use crate::{DebounceTimer, EngineEvent, Generation, RequestId};

enum EngineCommand {
    ScheduleDebounce { generation: Generation, delay: Duration },
    CancelDebounce,
    Fetch { request_id: RequestId, query: String },
    CancelFetch,
}

/// Handle to the engine thread, which owns the tokio runtime, the debounce
/// timer and the in-flight request.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn SuggestionFetcher>) -> io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("suggest-engine".to_string())
            .spawn(move || {
                let mut worker = Worker {
                    runtime: runtime.handle().clone(),
                    fetcher,
                    event_tx,
                    timer: DebounceTimer::new(),
                    in_flight: None,
                };
                while let Ok(command) = cmd_rx.recv() {
                    worker.handle(command);
                }
                drop(worker);
                drop(runtime);
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn schedule_debounce(&self, generation: Generation, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ScheduleDebounce { generation, delay });
    }

    pub fn cancel_debounce(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelDebounce);
    }

    pub fn fetch(&self, request_id: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            query: query.into(),
        });
    }

    pub fn cancel_fetch(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelFetch);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

struct InFlight {
    request_id: RequestId,
    cancel: CancellationToken,
}

struct Worker {
    runtime: Handle,
    fetcher: Arc<dyn SuggestionFetcher>,
    event_tx: mpsc::Sender<EngineEvent>,
    timer: DebounceTimer,
    in_flight: Option<InFlight>,
}

impl Worker {
    fn handle(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::ScheduleDebounce { generation, delay } => {
                self.timer
                    .schedule(&self.runtime, generation, delay, self.event_tx.clone());
            }
            EngineCommand::CancelDebounce => {
                self.timer.cancel();
            }
            EngineCommand::Fetch { request_id, query } => self.start_fetch(request_id, query),
            EngineCommand::CancelFetch => self.cancel_fetch(),
        }
    }

    fn start_fetch(&mut self, request_id: RequestId, query: String) {
        self.cancel_fetch();

        let cancel = CancellationToken::new();
        let cancelled = cancel.clone();
        let fetcher = self.fetcher.clone();
        let event_tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    suggest_debug!("Request {} cancelled", request_id);
                }
                result = fetcher.fetch(&query) => {
                    match &result {
                        Ok(records) => suggest_debug!(
                            "Request {} returned {} suggestions",
                            request_id,
                            records.len()
                        ),
                        Err(err) => suggest_warn!("Request {} failed: {}", request_id, err),
                    }
                    let _ = event_tx.send(EngineEvent::SuggestionsFetched { request_id, result });
                }
            }
        });

        self.in_flight = Some(InFlight { request_id, cancel });
    }

    fn cancel_fetch(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            suggest_debug!("Superseding request {}", in_flight.request_id);
            in_flight.cancel.cancel();
        }
    }
}
