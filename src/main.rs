use anyhow::Result;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use radiowatch::config::MonitorConfig;
use radiowatch::feed::event::{AntennaPayload, TelemetryEntry, TsValue};
use radiowatch::feed::replay::{AntennaFeed, ReplayFeed};
use radiowatch::session::runtime::SessionRuntime;

/// Demo driver: boots one session, replays a synthetic capture into it, and
/// logs every snapshot change the way a dashboard would re-render.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("radiowatch demo starting");

    let mut config = MonitorConfig::default();
    config.stream_interval_s = 0.25;

    let (tx, rx) = mpsc::channel(64);
    let (runtime, handle) = SessionRuntime::new(&config, rx);
    let session_task = tokio::spawn(runtime.run());

    let replay = ReplayFeed::new(
        demo_rows(),
        config.stream_interval(),
        false,
        config.thresholds.clone(),
    );
    let antenna = AntennaFeed::new(demo_antenna_rows(), config.stream_interval());

    let replay_task = tokio::spawn(replay.run(tx.clone()));
    let antenna_task = tokio::spawn(antenna.run(tx.clone()));
    drop(tx);

    let mut snapshots = handle.subscribe();
    let render_task = tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snap = snapshots.borrow_and_update().clone();
            tracing::info!(
                class = ?snap.latest_classification.class,
                probability = ?snap.latest_classification.probability,
                rfm_rssi = ?snap.display_rfm_rssi(),
                noise_floor = ?snap.display_noise_floor(),
                alerts = snap.alerts.len(),
                "snapshot"
            );
        }
    });

    // The replay is finite; once it drains, close the session like a client
    // disconnecting.
    replay_task.await?;
    handle.close();
    antenna_task.abort();
    session_task.await?;
    render_task.await?;

    tracing::info!("radiowatch demo finished");
    Ok(())
}

/// A short capture that drifts from a clean environment into a degraded one,
/// so the fallback classifier walks Normal -> Interference -> Critical.
fn demo_rows() -> Vec<TelemetryEntry> {
    (0..24)
        .map(|i| {
            let drift = i as f64 / 23.0;
            TelemetryEntry {
                timestamp: None, // stamped at receipt, like a live device post
                device_id: Some("esp32_01".to_string()),
                temperature: Some(21.0 + 4.0 * drift),
                humidity: Some(45.0 + 10.0 * drift),
                gas: Some(220.0 + 320.0 * drift),
                wifi_rssi: Some(-55.0 - 30.0 * drift),
                rfm_rssi: None,
                rf_noise_floor: Some(-101.0 + 9.0 * drift),
            }
        })
        .collect()
}

fn demo_antenna_rows() -> Vec<AntennaPayload> {
    (0..40)
        .map(|i| AntennaPayload {
            idx: i,
            ts: Some(TsValue::Seconds(1_700_000_000.0 + i as f64)),
            rfm_rssi: -50.0 + 2.5 * (i as f64 * 0.7).sin(),
            rf_noise_floor: -105.0 + 1.5 * (i as f64 * 0.3).cos(),
        })
        .collect()
}
