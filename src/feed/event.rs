use serde::{Deserialize, Serialize};

use super::FeedError;
use crate::session::classify::Classification;

/// Timestamp as feed sources emit it: Unix seconds or a datetime string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TsValue {
    Seconds(f64),
    Text(String),
}

/// One sensor snapshot pushed by a device or replay row. Fields are
/// individually optional; a missing metric is a gap, not a zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryEntry {
    /// Unix seconds on the wire.
    pub timestamp: Option<f64>,
    pub device_id: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub gas: Option<f64>,
    pub wifi_rssi: Option<f64>,
    pub rfm_rssi: Option<f64>,
    pub rf_noise_floor: Option<f64>,
}

/// Signal reading from the secondary receive path. Arrives on its own
/// cadence, decoupled from telemetry entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntennaPayload {
    pub idx: u64,
    #[serde(default)]
    pub ts: Option<TsValue>,
    pub rfm_rssi: f64,
    pub rf_noise_floor: f64,
}

/// Push events a session consumes. The two variants arrive on independent
/// channels upstream with no mutual ordering guarantee.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum FeedEvent {
    Telemetry {
        entry: TelemetryEntry,
        #[serde(default)]
        inference: Option<Classification>,
    },
    Antenna(AntennaPayload),
}

impl FeedEvent {
    /// Maps a raw socket frame (event name + JSON payload) to a typed event.
    /// Payloads missing required numeric fields are rejected here so the
    /// session only ever sees well-formed events.
    pub fn parse(event: &str, payload: &serde_json::Value) -> Result<Self, FeedError> {
        match event {
            "replay_row" => {
                let frame: ReplayRowFrame = serde_json::from_value(payload.clone())?;
                Ok(FeedEvent::Telemetry {
                    entry: frame.entry,
                    inference: frame.inference,
                })
            }
            "antenna_update" => Ok(FeedEvent::Antenna(serde_json::from_value(payload.clone())?)),
            other => Err(FeedError::UnknownEvent(other.to_string())),
        }
    }
}

/// Wire frame of one replay row: the entry plus whatever inference the
/// backend attached to it.
#[derive(Debug, Deserialize)]
struct ReplayRowFrame {
    entry: TelemetryEntry,
    #[serde(default)]
    inference: Option<Classification>,
}
