//! # strata-observability
//!
//! Structured tracing with span definitions and named events, processing and
//! memory metrics, a bounded log of processing passes, and degradation
//! tracking with alerting.

pub mod degradation;
pub mod engine;
pub mod metrics;
pub mod pass_log;
pub mod tracing_setup;

pub use degradation::{evaluate_alerts, AlertLevel, DegradationAlert, DegradationTracker};
pub use engine::ObservabilityEngine;
pub use metrics::MetricsCollector;
pub use pass_log::{PassLog, PassLogEntry};
