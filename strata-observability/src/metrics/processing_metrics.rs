//! Pass counts, latency, cancellation and degradation rates.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a finished pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    pub activated: usize,
    pub cancelled: bool,
    pub degraded: bool,
}

/// Tracks orchestrator throughput.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingMetrics {
    /// Completed passes, including cancelled and degraded ones.
    pub total_processed: u64,
    /// Sum of pass latencies, for the running mean.
    pub total_latency_ms: f64,
    pub cancelled: u64,
    pub degraded_passes: u64,
    /// Passes that activated nothing.
    pub empty_results: u64,
    /// Inputs rejected before encoding.
    pub malformed_rejected: u64,
    /// Pass counts keyed by input type.
    pub passes_by_input_type: BTreeMap<String, u64>,
}

impl ProcessingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished pass.
    pub fn record_pass(&mut self, input_type: &str, latency: Duration, outcome: PassOutcome) {
        self.total_processed += 1;
        self.total_latency_ms += latency.as_secs_f64() * 1_000.0;
        *self
            .passes_by_input_type
            .entry(input_type.to_string())
            .or_default() += 1;
        if outcome.cancelled {
            self.cancelled += 1;
        }
        if outcome.degraded {
            self.degraded_passes += 1;
        }
        if outcome.activated == 0 {
            self.empty_results += 1;
        }
    }

    pub fn record_malformed(&mut self) {
        self.malformed_rejected += 1;
    }

    pub fn avg_latency_ms(&self) -> f64 {
        if self.total_processed == 0 {
            return 0.0;
        }
        self.total_latency_ms / self.total_processed as f64
    }

    /// Fraction of passes that activated at least one memory.
    pub fn hit_rate(&self) -> f64 {
        if self.total_processed == 0 {
            return 0.0;
        }
        1.0 - self.empty_results as f64 / self.total_processed as f64
    }
}
