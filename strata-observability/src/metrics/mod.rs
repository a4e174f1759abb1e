//! Central metrics registry.
//!
//! [`MetricsCollector`] owns the domain-specific collectors and folds them
//! into the [`ProcessingStats`] the engine reports.

pub mod memory_metrics;
pub mod processing_metrics;

pub use memory_metrics::MemoryMetrics;
pub use processing_metrics::{PassOutcome, ProcessingMetrics};

use strata_core::models::ProcessingStats;

/// Central metrics registry that owns all domain-specific collectors.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub processing: ProcessingMetrics,
    pub memory: MemoryMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The cumulative counters exposed by `get_processing_stats`.
    pub fn processing_stats(&self) -> ProcessingStats {
        ProcessingStats {
            total_processed: self.processing.total_processed,
            avg_latency_ms: self.processing.avg_latency_ms(),
            decay_evictions_total: self.memory.decay_evictions_total,
            capacity_evictions_total: self.memory.capacity_evictions_total,
            cancelled: self.processing.cancelled,
            degraded_passes: self.processing.degraded_passes,
            promotions_total: self.memory.promotions_total,
            malformed_rejected: self.processing.malformed_rejected,
        }
    }
}
