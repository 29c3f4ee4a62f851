use radiowatch::session::window::{RollingWindow, Sample};

#[test]
fn capacity_is_never_exceeded() {
    let mut window = RollingWindow::new(30);
    for i in 0..1000 {
        window.push(Sample::new(i, Some(i as f64)));
        assert!(
            window.len() <= window.capacity(),
            "window exceeded capacity after push {}",
            i
        );
    }
    assert_eq!(window.len(), 30);
}

#[test]
fn oldest_sample_is_evicted_first() {
    let mut window = RollingWindow::new(5);
    for i in 0..6 {
        window.push(Sample::new(i * 100, Some(i as f64)));
    }

    let samples = window.samples();
    assert_eq!(samples.len(), 5);
    // The first-ever pushed sample (ts=0) is gone; order is arrival order.
    assert_eq!(samples[0].timestamp_ms, 100);
    assert_eq!(samples[4].timestamp_ms, 500);
    assert!(samples.iter().all(|s| s.timestamp_ms != 0));
}

#[test]
fn gaps_are_stored_not_interpolated() {
    let mut window = RollingWindow::new(10);
    window.push(Sample::new(1000, Some(1.5)));
    window.push(Sample::new(2000, None));
    window.push(Sample::new(3000, Some(0.0)));

    let samples = window.samples();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[1].value, None, "gap must stay a gap");
    assert_eq!(
        samples[2].value,
        Some(0.0),
        "zero is a real reading, not a gap"
    );
    let non_null = samples.iter().filter(|s| s.value.is_some()).count();
    assert_eq!(non_null, 2, "pushing a gap must not change other readings");
}

#[test]
fn nan_degrades_to_gap_at_construction() {
    let sample = Sample::new(1000, Some(f64::NAN));
    assert_eq!(sample.value, None);
}

#[test]
fn arrival_order_is_kept_for_out_of_order_timestamps() {
    let mut window = RollingWindow::new(10);
    window.push(Sample::new(2000, Some(1.0)));
    window.push(Sample::new(1000, Some(2.0)));

    let samples = window.samples();
    assert_eq!(samples[0].timestamp_ms, 2000);
    assert_eq!(samples[1].timestamp_ms, 1000);
}

#[test]
fn latest_tracks_the_newest_arrival() {
    let mut window = RollingWindow::new(3);
    assert!(window.is_empty());
    assert_eq!(window.latest(), None);

    window.push(Sample::new(1000, Some(7.0)));
    window.push(Sample::new(2000, None));
    assert_eq!(window.latest(), Some(Sample::new(2000, None)));
}
