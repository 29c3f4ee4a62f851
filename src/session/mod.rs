//! Per-client aggregation core.
//!
//! # OWNERSHIP INVARIANT
//! One `Session` per connected client owns every mutable structure the feed
//! writes into (windows, classification store, alert log, latest-value slots).
//! All writes for one event complete before the next event is handled, so
//! readers never observe a half-applied event.

pub mod alerts;
pub mod classify;
pub mod clock;
pub mod dispatch;
pub mod runtime;
pub mod view;
pub mod window;
