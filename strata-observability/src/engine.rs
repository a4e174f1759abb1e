//! [`ObservabilityEngine`] owns metrics, the pass log and degradation tracking.

use chrono::{DateTime, Utc};
use strata_core::errors::{StrataError, StrataResult};
use strata_core::models::{DegradationEvent, ProcessingStats};

use crate::degradation::{evaluate_alerts, DegradationAlert, DegradationTracker};
use crate::metrics::MetricsCollector;
use crate::pass_log::{PassLog, PassLogEntry};

#[derive(Debug, Default)]
pub struct ObservabilityEngine {
    pub metrics: MetricsCollector,
    pub degradation: DegradationTracker,
    pub pass_log: PassLog,
}

impl ObservabilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished pass in both the metrics and the pass log.
    pub fn record_pass(&mut self, entry: PassLogEntry) {
        self.metrics.processing.record_pass(
            &entry.input_type,
            entry.latency,
            crate::metrics::PassOutcome {
                activated: entry.activated,
                cancelled: entry.cancelled,
                degraded: entry.degradations > 0,
            },
        );
        self.pass_log.record(entry);
    }

    pub fn record_degradation(&mut self, event: DegradationEvent) {
        self.degradation.record(event);
    }

    pub fn degradation_alerts(&self, now: DateTime<Utc>) -> Vec<DegradationAlert> {
        evaluate_alerts(&self.degradation, now)
    }

    pub fn processing_stats(&self) -> ProcessingStats {
        self.metrics.processing_stats()
    }

    /// Reset all metrics (for testing or periodic rotation).
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Serialize current metrics and pass log summary to JSON.
    pub fn metrics_snapshot(&self) -> StrataResult<serde_json::Value> {
        let metrics_json =
            serde_json::to_value(&self.metrics).map_err(StrataError::SerializationError)?;
        Ok(serde_json::json!({
            "metrics": metrics_json,
            "pass_log_count": self.pass_log.count(),
            "pass_avg_latency_ms": self.pass_log.avg_latency().as_millis() as u64,
            "pass_p95_latency_ms": self.pass_log.latency_percentile(0.95).as_millis() as u64,
            "avg_confidence": self.pass_log.avg_confidence(),
        }))
    }
}
