use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDateTime};

use crate::feed::event::TsValue;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Telemetry entries carry Unix seconds; live devices may omit the field
/// entirely. Missing or non-positive stamps fall back to receipt time.
pub fn normalize_epoch(seconds: Option<f64>, received_ms: i64) -> i64 {
    match seconds {
        Some(s) if s.is_finite() && s > 0.0 => (s * 1000.0).round() as i64,
        _ => received_ms,
    }
}

/// Antenna rows carry either an absolute datetime string (ISO, UTC) or Unix
/// seconds. Unparseable stamps fall back to receipt time.
pub fn normalize_ts(ts: Option<&TsValue>, received_ms: i64) -> i64 {
    match ts {
        Some(TsValue::Seconds(s)) => normalize_epoch(Some(*s), received_ms),
        Some(TsValue::Text(text)) => parse_datetime(text).unwrap_or(received_ms),
        None => received_ms,
    }
}

fn parse_datetime(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    // Antenna CSV stamps are naive UTC ("2024-01-01 00:00:00.123").
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().timestamp_millis())
}
