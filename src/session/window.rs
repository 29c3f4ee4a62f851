use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One timestamped reading. `value: None` is a gap (no reading this tick),
/// distinct from `Some(0.0)` which is a legitimate gas/RSSI level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub value: Option<f64>,
}

impl Sample {
    /// NaN readings degrade to a gap at construction; they are never stored.
    pub fn new(timestamp_ms: i64, value: Option<f64>) -> Self {
        Self {
            timestamp_ms,
            value: value.filter(|v| !v.is_nan()),
        }
    }
}

/// Fixed-capacity FIFO of samples backing one chart or sparkline.
///
/// Arrival order is preserved even when timestamps arrive out of order;
/// overflow evicts the single oldest sample.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    buffer: VecDeque<Sample>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: Sample) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(sample);
    }

    /// Snapshot copy in arrival order. Gaps come back as-is, never
    /// interpolated.
    pub fn samples(&self) -> Vec<Sample> {
        self.buffer.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<Sample> {
        self.buffer.back().copied()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
