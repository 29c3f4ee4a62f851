use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

use super::event::{AntennaPayload, FeedEvent, TelemetryEntry};
use super::rules;
use crate::config::Thresholds;

/// Stop flag shared with a running replay.
#[derive(Debug, Clone)]
pub struct ReplayControl {
    running: Arc<AtomicBool>,
}

impl ReplayControl {
    fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

/// Re-pushes previously captured telemetry rows at a fixed cadence,
/// attaching a fallback classification to each. Stops at the end of the
/// rows unless `looped`; the stop flag is checked once per row.
pub struct ReplayFeed {
    rows: Vec<TelemetryEntry>,
    cadence: Duration,
    looped: bool,
    thresholds: Thresholds,
    control: ReplayControl,
}

impl ReplayFeed {
    pub fn new(
        rows: Vec<TelemetryEntry>,
        cadence: Duration,
        looped: bool,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            rows,
            cadence,
            looped,
            thresholds,
            control: ReplayControl::new(),
        }
    }

    pub fn control(&self) -> ReplayControl {
        self.control.clone()
    }

    pub async fn run(self, tx: mpsc::Sender<FeedEvent>) {
        if self.rows.is_empty() {
            warn!("replay has no rows");
            return;
        }

        let mut cadence = interval(self.cadence);
        cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(rows = self.rows.len(), looped = self.looped, "replay started");
        let mut i = 0usize;
        while self.control.is_running() {
            cadence.tick().await;

            let entry = self.rows[i % self.rows.len()].clone();
            let inference = rules::classify_entry(&entry, &self.thresholds);
            let event = FeedEvent::Telemetry {
                entry,
                inference: Some(inference),
            };
            if tx.send(event).await.is_err() {
                // Session gone; nothing left to feed.
                break;
            }

            i += 1;
            if i >= self.rows.len() && !self.looped {
                break;
            }
        }
        info!(rows_sent = i, "replay finished");
    }
}

/// Cycles antenna rows at the stream cadence, wrapping modulo the row count
/// like the capture it was generated from. Runs until the session closes.
pub struct AntennaFeed {
    rows: Vec<AntennaPayload>,
    cadence: Duration,
}

impl AntennaFeed {
    pub fn new(rows: Vec<AntennaPayload>, cadence: Duration) -> Self {
        Self { rows, cadence }
    }

    pub async fn run(self, tx: mpsc::Sender<FeedEvent>) {
        if self.rows.is_empty() {
            warn!("antenna feed has no rows");
            return;
        }

        let mut cadence = interval(self.cadence);
        cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut i = 0usize;
        loop {
            cadence.tick().await;
            let payload = self.rows[i % self.rows.len()].clone();
            if tx.send(FeedEvent::Antenna(payload)).await.is_err() {
                break;
            }
            i += 1;
        }
    }
}
