use std::time::Duration;

use serde::Deserialize;

/// Rule thresholds for the fallback classifier. Signal levels are dBm,
/// gas is raw sensor units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Below this, WiFi is considered degraded.
    pub wifi_rssi: f64,
    /// Below this, the RFM link is considered degraded.
    pub rfm_rssi: f64,
    /// Above this, air quality counts against the environment.
    pub gas: f64,
    /// Above this, the band is considered noisy.
    pub rf_noise_floor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            wifi_rssi: -70.0,
            rfm_rssi: -75.0,
            gas: 400.0,
            rf_noise_floor: -95.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Samples kept per metric chart.
    pub chart_window: usize,
    /// Samples kept for the antenna sparkline.
    pub antenna_window: usize,
    /// Alerts retained for operator review, newest first.
    pub alert_log: usize,
    /// Seconds between replay/antenna pushes.
    pub stream_interval_s: f64,
    pub thresholds: Thresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            chart_window: 80,
            antenna_window: 30,
            alert_log: 20,
            stream_interval_s: 2.0,
            thresholds: Thresholds::default(),
        }
    }
}

impl MonitorConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn stream_interval(&self) -> Duration {
        Duration::from_secs_f64(self.stream_interval_s.max(0.01))
    }
}
