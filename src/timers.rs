//! Phase timing for synthesis calls.
//!
//! A synthesis call spends its time in two phases: resolving grant resource ids
//! against the registry, and expanding operations through the operation
//! tables. [`PhaseTimings`] accumulates both across all grants of a call;
//! [`PhaseTimer`] is the RAII guard that adds to one of them.

use std::time::{Duration, Instant};

/// Accumulated per-phase time for one synthesis call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub resolve: Duration,
    pub map: Duration,
}

impl PhaseTimings {
    pub fn measured(&self) -> Duration {
        self.resolve + self.map
    }
}

/// Adds the time between its creation and its drop to `slot`.
///
/// Time is recorded on every exit path, including early `?` returns.
pub struct PhaseTimer<'a> {
    start: Instant,
    slot: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn new(slot: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            slot,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        *self.slot += self.start.elapsed();
    }
}
