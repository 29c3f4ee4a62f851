use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use radiowatch::config::Thresholds;
use radiowatch::feed::event::{AntennaPayload, FeedEvent, TelemetryEntry, TsValue};
use radiowatch::feed::replay::{AntennaFeed, ReplayFeed};
use radiowatch::session::classify::EnvClass;

const WAIT: Duration = Duration::from_secs(5);
const CADENCE: Duration = Duration::from_millis(2);

fn rows(n: usize) -> Vec<TelemetryEntry> {
    (0..n)
        .map(|i| TelemetryEntry {
            device_id: Some(format!("replay_{i}")),
            temperature: Some(20.0 + i as f64),
            wifi_rssi: Some(-60.0),
            ..Default::default()
        })
        .collect()
}

#[tokio::test]
async fn finite_replay_sends_every_row_once() {
    let (tx, mut rx) = mpsc::channel(16);
    let feed = ReplayFeed::new(rows(3), CADENCE, false, Thresholds::default());
    tokio::spawn(feed.run(tx));

    let mut seen = Vec::new();
    while let Some(event) = timeout(WAIT, rx.recv()).await.unwrap() {
        seen.push(event);
    }

    assert_eq!(seen.len(), 3, "each row is replayed exactly once");
    for (i, event) in seen.iter().enumerate() {
        let FeedEvent::Telemetry { entry, inference } = event else {
            panic!("replay only emits telemetry events");
        };
        assert_eq!(entry.device_id.as_deref(), Some(format!("replay_{i}").as_str()));
        let inference = inference.as_ref().expect("replay attaches a fallback inference");
        assert_eq!(inference.class, EnvClass::Normal);
    }
}

#[tokio::test]
async fn looped_replay_stops_on_control() {
    let (tx, mut rx) = mpsc::channel(16);
    let feed = ReplayFeed::new(rows(2), CADENCE, true, Thresholds::default());
    let control = feed.control();
    let feed_task = tokio::spawn(feed.run(tx));

    // Looping: it keeps wrapping past the row count.
    for _ in 0..5 {
        timeout(WAIT, rx.recv()).await.unwrap().expect("looped feed keeps sending");
    }

    control.stop();
    // Keep draining so a full channel can never wedge the feed; the channel
    // closes once the stopped feed drops its sender.
    while timeout(WAIT, rx.recv()).await.unwrap().is_some() {}
    timeout(WAIT, feed_task).await.expect("stop flag ends the feed").unwrap();
}

#[tokio::test]
async fn replay_stops_when_the_session_is_gone() {
    let (tx, rx) = mpsc::channel(1);
    let feed = ReplayFeed::new(rows(50), CADENCE, true, Thresholds::default());
    let feed_task = tokio::spawn(feed.run(tx));

    drop(rx);
    timeout(WAIT, feed_task)
        .await
        .expect("a closed channel must end the feed")
        .unwrap();
}

#[tokio::test]
async fn antenna_feed_wraps_modulo_the_row_count() {
    let antenna_rows: Vec<AntennaPayload> = (0..2)
        .map(|i| AntennaPayload {
            idx: i,
            ts: Some(TsValue::Seconds(1000.0 + i as f64)),
            rfm_rssi: -50.0,
            rf_noise_floor: -105.0,
        })
        .collect();

    let (tx, mut rx) = mpsc::channel(16);
    let feed_task = tokio::spawn(AntennaFeed::new(antenna_rows, CADENCE).run(tx));

    let mut idxs = Vec::new();
    for _ in 0..5 {
        let event = timeout(WAIT, rx.recv()).await.unwrap().unwrap();
        let FeedEvent::Antenna(payload) = event else {
            panic!("antenna feed only emits antenna events");
        };
        idxs.push(payload.idx);
    }
    assert_eq!(idxs, vec![0, 1, 0, 1, 0]);

    drop(rx);
    timeout(WAIT, feed_task).await.unwrap().unwrap();
}
