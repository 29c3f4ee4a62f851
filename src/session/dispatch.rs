use tracing::{debug, trace};
use uuid::Uuid;

use super::alerts::AlertLog;
use super::classify::{Classification, ClassificationStore};
use super::clock;
use super::view::{ViewSnapshot, WindowSet};
use super::window::{RollingWindow, Sample};
use crate::config::MonitorConfig;
use crate::feed::event::{AntennaPayload, FeedEvent, TelemetryEntry};

/// Per-connection aggregation state: the stream dispatcher plus everything
/// it writes into.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    wifi: RollingWindow,
    gas: RollingWindow,
    temperature: RollingWindow,
    humidity: RollingWindow,
    antenna: RollingWindow,
    classification: ClassificationStore,
    alerts: AlertLog,
    latest_entry: Option<TelemetryEntry>,
    latest_antenna: Option<AntennaPayload>,
}

impl Session {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            wifi: RollingWindow::new(config.chart_window),
            gas: RollingWindow::new(config.chart_window),
            temperature: RollingWindow::new(config.chart_window),
            humidity: RollingWindow::new(config.chart_window),
            antenna: RollingWindow::new(config.antenna_window),
            classification: ClassificationStore::new(),
            alerts: AlertLog::new(config.alert_log),
            latest_entry: None,
            latest_antenna: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Entry point for the transport: applies one event at receipt time.
    pub fn apply(&mut self, event: FeedEvent) {
        self.apply_at(event, clock::now_ms());
    }

    /// Clock-injected variant; `received_ms` stands in for the receipt wall
    /// clock when an event carries no usable timestamp of its own.
    pub fn apply_at(&mut self, event: FeedEvent, received_ms: i64) {
        match event {
            FeedEvent::Telemetry { entry, inference } => {
                self.on_telemetry(entry, inference, received_ms)
            }
            FeedEvent::Antenna(payload) => self.on_antenna(payload, received_ms),
        }
    }

    fn on_telemetry(
        &mut self,
        entry: TelemetryEntry,
        inference: Option<Classification>,
        received_ms: i64,
    ) {
        let ts = clock::normalize_epoch(entry.timestamp, received_ms);

        // Four independent pushes: a metric missing from this entry leaves a
        // gap in its own window without holding back the others.
        self.wifi.push(Sample::new(ts, entry.wifi_rssi));
        self.gas.push(Sample::new(ts, entry.gas));
        self.temperature.push(Sample::new(ts, entry.temperature));
        self.humidity.push(Sample::new(ts, entry.humidity));

        if let Some(next) = inference {
            let transition = self.classification.update(next);
            let current = self.classification.current().clone();
            // The log applies its own policy; Critical repeats alert even
            // when `transition.changed` is false.
            if let Some(alert) = self.alerts.on_classification(&transition.previous, &current, ts) {
                debug!(
                    session = %self.id,
                    class = ?alert.class,
                    sequence = alert.sequence,
                    "alert raised"
                );
            }
        }

        self.latest_entry = Some(entry);
    }

    fn on_antenna(&mut self, payload: AntennaPayload, received_ms: i64) {
        let ts = clock::normalize_ts(payload.ts.as_ref(), received_ms);
        self.antenna.push(Sample::new(ts, Some(payload.rfm_rssi)));
        self.latest_antenna = Some(payload);
        trace!(session = %self.id, "antenna snapshot updated");
    }

    /// Pure projection of current state; safe to call at any cadence.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            latest_entry: self.latest_entry.clone(),
            latest_classification: self.classification.current().clone(),
            latest_antenna: self.latest_antenna.clone(),
            windows: WindowSet {
                wifi: self.wifi.samples(),
                gas: self.gas.samples(),
                temperature: self.temperature.samples(),
                humidity: self.humidity.samples(),
                antenna: self.antenna.samples(),
            },
            alerts: self.alerts.entries(),
        }
    }
}
