use std::collections::VecDeque;

use serde::Serialize;

use super::classify::{Classification, EnvClass};

/// One logged classification transition or repeated Critical reading.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub class: EnvClass,
    pub probability: Option<f64>,
    pub created_at_ms: i64,
    /// Monotonic per session, never reset. Stable tie-breaker when
    /// `created_at_ms` collides.
    pub sequence: u64,
}

/// Bounded alert log, newest first.
///
/// Policy: alert on any class change, and on EVERY Critical reading even when
/// the class did not change. Non-Critical repeats are suppressed against the
/// current classification only, not the full log, so `Normal -> Interference
/// -> Normal` logs all three.
#[derive(Debug)]
pub struct AlertLog {
    entries: VecDeque<Alert>,
    capacity: usize,
    next_sequence: u64,
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    /// Applies the alert policy to one store transition. `at_ms` is the
    /// normalized timestamp of the event that carried the inference.
    pub fn on_classification(
        &mut self,
        previous: &Classification,
        next: &Classification,
        at_ms: i64,
    ) -> Option<Alert> {
        let changed = next.class != previous.class;
        if !changed && next.class != EnvClass::Critical {
            return None;
        }

        let alert = Alert {
            class: next.class,
            probability: next.probability,
            created_at_ms: at_ms,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        self.entries.push_front(alert.clone());
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
        Some(alert)
    }

    /// Snapshot copy, newest first.
    pub fn entries(&self) -> Vec<Alert> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
