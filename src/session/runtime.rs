use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::dispatch::Session;
use super::view::ViewSnapshot;
use crate::config::MonitorConfig;
use crate::feed::event::FeedEvent;

/// Consumer side of a running session: pull a snapshot at any cadence, await
/// changes, or close the session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    snapshots: watch::Receiver<ViewSnapshot>,
    cancel: CancellationToken,
}

impl SessionHandle {
    pub fn snapshot(&self) -> ViewSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Dedicated receiver for `changed().await` re-render loops.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.clone()
    }

    /// Ends the session as if the transport connection closed.
    pub fn close(&self) {
        self.cancel.cancel();
    }
}

/// Owns a [`Session`] for the life of one connection: drains the feed
/// channel, applies each event, publishes the refreshed snapshot.
pub struct SessionRuntime {
    session: Session,
    events: mpsc::Receiver<FeedEvent>,
    snapshots: watch::Sender<ViewSnapshot>,
    cancel: CancellationToken,
}

impl SessionRuntime {
    pub fn new(config: &MonitorConfig, events: mpsc::Receiver<FeedEvent>) -> (Self, SessionHandle) {
        let session = Session::new(config);
        let (snapshots, rx) = watch::channel(session.snapshot());
        let cancel = CancellationToken::new();
        let handle = SessionHandle {
            snapshots: rx,
            cancel: cancel.clone(),
        };
        (
            Self {
                session,
                events,
                snapshots,
                cancel,
            },
            handle,
        )
    }

    /// Runs until the feed channel closes or the handle cancels. Owned state
    /// is dropped on exit; nothing is persisted.
    pub async fn run(mut self) {
        info!(session = %self.session.id(), "session started");
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => break,
                event = self.events.recv() => {
                    let Some(event) = event else { break };
                    self.session.apply(event);
                    // Publish only after the event is fully applied, so
                    // subscribers never see a half-written window or log.
                    let _ = self.snapshots.send(self.session.snapshot());
                }
            }
        }
        info!(session = %self.session.id(), "session closed");
    }
}

/// Convenience: spawn the runtime on the current tokio runtime.
pub fn spawn(
    config: &MonitorConfig,
    events: mpsc::Receiver<FeedEvent>,
) -> (tokio::task::JoinHandle<()>, SessionHandle) {
    let (runtime, handle) = SessionRuntime::new(config, events);
    (tokio::spawn(runtime.run()), handle)
}
