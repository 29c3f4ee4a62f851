use crate::config::Thresholds;
use crate::feed::event::TelemetryEntry;
use crate::session::classify::{Classification, EnvClass};

/// Deterministic fallback classifier for rows with no model output attached.
///
/// Scores the entry against fixed thresholds; a missing metric contributes
/// no points. Score 0-1 is Normal, 2 is Interference, 3+ is Critical.
pub fn classify_entry(entry: &TelemetryEntry, thresholds: &Thresholds) -> Classification {
    let mut score = 0u8;
    if entry.wifi_rssi.is_some_and(|v| v < thresholds.wifi_rssi) {
        score += 1;
    }
    if entry.rfm_rssi.is_some_and(|v| v < thresholds.rfm_rssi) {
        score += 1;
    }
    if entry.gas.is_some_and(|v| v > thresholds.gas) {
        score += 1;
    }
    if entry.rf_noise_floor.is_some_and(|v| v > thresholds.rf_noise_floor) {
        score += 1;
    }

    let class = match score {
        0 | 1 => EnvClass::Normal,
        2 => EnvClass::Interference,
        _ => EnvClass::Critical,
    };
    Classification::new(class, Some(1.0))
}
