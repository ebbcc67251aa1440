//! Vendor-agnostic synthesis metrics via a pluggable sink.
//!
//! **Note:** This module is only available when the `observability` feature is enabled.
//!
//! Implement [`MetricsSink`] and install it once with [`set_sink`]; every call
//! to `PolicySynthesizer::synthesize` then reports a [`SynthesisStats`]
//! snapshot, and a [`SynthesisPhases`] breakdown for sinks that want it.
//!
//! ```ignore
//! use policy_synth_core::metrics::{MetricsSink, SynthesisStats};
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use std::sync::Arc;
//!
//! struct Counter(AtomicU64);
//!
//! impl MetricsSink for Counter {
//!     fn on_synthesis(&self, stats: &SynthesisStats) {
//!         self.0.fetch_add(stats.statements as u64, Ordering::Relaxed);
//!     }
//! }
//!
//! policy_synth_core::metrics::set_sink(Arc::new(Counter(AtomicU64::new(0))));
//! ```

use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::warn;

use crate::timers::PhaseTimings;

/// Snapshot of one synthesis call.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisStats {
    /// Wall-clock time of the whole call
    pub duration: Duration,
    /// Number of grants passed in
    pub grants: usize,
    /// Number of statements produced (zero on failure)
    pub statements: usize,
    /// Whether the call returned statements rather than an error
    pub succeeded: bool,
}

/// Per-phase breakdown of a synthesis call, in milliseconds.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisPhases {
    /// Time spent resolving resource ids
    pub resolve_ms: f64,
    /// Time spent expanding operations into actions
    pub map_ms: f64,
    /// Total call time
    pub total_ms: f64,
}

impl SynthesisPhases {
    pub(crate) fn from_timings(timings: &PhaseTimings, total: Duration) -> Self {
        Self {
            resolve_ms: timings.resolve.as_secs_f64() * 1_000.0,
            map_ms: timings.map.as_secs_f64() * 1_000.0,
            total_ms: total.as_secs_f64() * 1_000.0,
        }
    }

    /// Time not accounted for by the measured phases.
    pub fn overhead_ms(&self) -> f64 {
        self.total_ms - (self.resolve_ms + self.map_ms)
    }
}

/// Consumer of synthesis metrics.
///
/// Called synchronously at the end of every synthesis call, successful or
/// not, so implementations must be cheap and thread-safe.
pub trait MetricsSink: Send + Sync {
    fn on_synthesis(&self, stats: &SynthesisStats);

    /// Optional per-phase timings. Ignored by default.
    fn on_synthesis_phases(&self, _stats: &SynthesisStats, _phases: &SynthesisPhases) {}
}

struct NoOpSink;

impl MetricsSink for NoOpSink {
    fn on_synthesis(&self, _stats: &SynthesisStats) {}
}

static SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

fn sink() -> Arc<dyn MetricsSink> {
    SINK.get_or_init(|| Arc::new(NoOpSink)).clone()
}

/// Install the global metrics sink.
///
/// Only the first call (or the first synthesis, which installs the no-op sink)
/// wins; later calls are ignored with a warning.
pub fn set_sink(sink: Arc<dyn MetricsSink>) {
    if SINK.set(sink).is_err() {
        warn!(
            "Metrics sink was already initialized. Ignoring subsequent set_sink call. Set the sink before the first synthesis."
        );
    }
}

pub(crate) fn record_synthesis(stats: SynthesisStats, phases: SynthesisPhases) {
    let sink = sink();
    sink.on_synthesis(&stats);
    sink.on_synthesis_phases(&stats, &phases);
}
