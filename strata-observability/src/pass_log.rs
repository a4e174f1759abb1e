//! Bounded log of processing passes: input type, latency, activation count,
//! confidence, and how the pass ended.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of retained entries.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// A single pass log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassLogEntry {
    pub input_type: String,
    pub latency: Duration,
    pub activated: usize,
    pub confidence: f64,
    pub cancelled: bool,
    pub degradations: usize,
    pub at: DateTime<Utc>,
}

/// Append-only pass log with ring buffer behavior.
#[derive(Debug, Clone)]
pub struct PassLog {
    entries: VecDeque<PassLogEntry>,
    max_entries: usize,
}

impl PassLog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Create with a custom capacity. A capacity of zero keeps nothing.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(1_024)),
            max_entries,
        }
    }

    /// Record a pass.
    pub fn record(&mut self, entry: PassLogEntry) {
        tracing::debug!(
            event = "pass_logged",
            input_type = %entry.input_type,
            latency_ms = entry.latency.as_millis() as u64,
            activated = entry.activated,
            confidence = entry.confidence,
            cancelled = entry.cancelled,
            "pass logged"
        );

        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &PassLogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&PassLogEntry> {
        self.entries.back()
    }

    /// Average latency across retained entries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        let idx = ((p * (latencies.len() - 1) as f64).round() as usize).min(latencies.len() - 1);
        latencies[idx]
    }

    /// Mean confidence of passes that were not cancelled.
    pub fn avg_confidence(&self) -> f64 {
        let (sum, n) = self
            .entries
            .iter()
            .filter(|e| !e.cancelled)
            .fold((0.0, 0usize), |(s, n), e| (s + e.confidence, n + 1));
        if n == 0 {
            0.0
        } else {
            sum / n as f64
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for PassLog {
    fn default() -> Self {
        Self::new()
    }
}
