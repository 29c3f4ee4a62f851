use serde::Serialize;

use super::alerts::Alert;
use super::classify::Classification;
use super::window::Sample;
use crate::feed::event::{AntennaPayload, TelemetryEntry};

/// Chart histories included in a snapshot, arrival-ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowSet {
    pub wifi: Vec<Sample>,
    pub gas: Vec<Sample>,
    pub temperature: Vec<Sample>,
    pub humidity: Vec<Sample>,
    pub antenna: Vec<Sample>,
}

/// Read-only projection handed to presentation. Holds no references into
/// session state, so it stays valid after further events land.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub latest_entry: Option<TelemetryEntry>,
    pub latest_classification: Classification,
    pub latest_antenna: Option<AntennaPayload>,
    pub windows: WindowSet,
    /// Newest first.
    pub alerts: Vec<Alert>,
}

impl ViewSnapshot {
    /// RFM RSSI for display. The antenna stream is authoritative; the value
    /// carried inside a telemetry entry is only a fallback.
    pub fn display_rfm_rssi(&self) -> Option<f64> {
        self.latest_antenna
            .as_ref()
            .map(|a| a.rfm_rssi)
            .or_else(|| self.latest_entry.as_ref().and_then(|e| e.rfm_rssi))
    }

    /// Noise floor for display, same precedence as [`Self::display_rfm_rssi`].
    pub fn display_noise_floor(&self) -> Option<f64> {
        self.latest_antenna
            .as_ref()
            .map(|a| a.rf_noise_floor)
            .or_else(|| self.latest_entry.as_ref().and_then(|e| e.rf_noise_floor))
    }
}
