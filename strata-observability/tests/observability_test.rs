use std::time::Duration;

use chrono::Duration as ChronoDuration;
use strata_core::memory::{NodeId, TierKind};
use strata_core::models::{DecayReport, DegradationEvent};
use strata_observability::degradation::RecoveryStatus;
use strata_observability::metrics::PassOutcome;
use strata_observability::tracing_setup::spans::names;
use strata_observability::*;
use test_fixtures::fixed_now;

fn entry(input_type: &str, latency_ms: u64, activated: usize, confidence: f64) -> PassLogEntry {
    PassLogEntry {
        input_type: input_type.into(),
        latency: Duration::from_millis(latency_ms),
        activated,
        confidence,
        cancelled: false,
        degradations: 0,
        at: fixed_now(),
    }
}

fn degradation(component: &str, minutes_ago: i64) -> DegradationEvent {
    DegradationEvent {
        component: component.into(),
        failure: "node vanished".into(),
        fallback_used: "skipped".into(),
        timestamp: fixed_now() - ChronoDuration::minutes(minutes_ago),
    }
}

// ── Metrics ───────────────────────────────────────────────────────────────

#[test]
fn processing_stats_fold_both_collectors() {
    let mut engine = ObservabilityEngine::new();
    engine.record_pass(entry("query", 10, 2, 0.8));
    engine.record_pass(PassLogEntry {
        cancelled: true,
        ..entry("event", 30, 0, 0.0)
    });
    engine.metrics.processing.record_malformed();

    let mut report = DecayReport::new(fixed_now());
    report.record(TierKind::Working, vec![NodeId::new(), NodeId::new()]);
    engine.metrics.memory.record_decay(&report, 3);
    engine.metrics.memory.record_capacity_eviction(TierKind::Episodic);
    engine.metrics.memory.record_promotion();

    let stats = engine.processing_stats();
    assert_eq!(stats.total_processed, 2);
    assert!((stats.avg_latency_ms - 20.0).abs() < 1e-9);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.decay_evictions_total, 2);
    assert_eq!(stats.capacity_evictions_total, 1);
    assert_eq!(stats.promotions_total, 1);
    assert_eq!(stats.malformed_rejected, 1);
    assert_eq!(engine.metrics.memory.evictions_in(TierKind::Working), 2);
    assert_eq!(engine.metrics.memory.edges_pruned, 3);
}

#[test]
fn hit_rate_counts_non_empty_passes() {
    let mut m = strata_observability::metrics::ProcessingMetrics::new();
    let outcome = |activated| PassOutcome {
        activated,
        cancelled: false,
        degraded: false,
    };
    m.record_pass("query", Duration::ZERO, outcome(3));
    m.record_pass("query", Duration::ZERO, outcome(0));
    assert_eq!(m.hit_rate(), 0.5);
    assert_eq!(m.passes_by_input_type.get("query"), Some(&2));
}

#[test]
fn reset_clears_everything() {
    let mut engine = ObservabilityEngine::new();
    engine.record_pass(entry("text", 5, 1, 0.5));
    engine.reset_metrics();
    assert_eq!(engine.processing_stats().total_processed, 0);
}

#[test]
fn metrics_snapshot_is_json() {
    let mut engine = ObservabilityEngine::new();
    engine.record_pass(entry("query", 4, 1, 0.6));
    let json = engine.metrics_snapshot().unwrap();
    assert_eq!(json["pass_log_count"], 1);
    assert_eq!(json["metrics"]["processing"]["total_processed"], 1);
}

// ── Pass log ──────────────────────────────────────────────────────────────

#[test]
fn pass_log_drops_oldest_beyond_capacity() {
    let mut log = PassLog::with_capacity(2);
    for ms in [1, 2, 3] {
        log.record(entry("query", ms, 0, 0.0));
    }
    assert_eq!(log.count(), 2);
    let kept: Vec<u128> = log.entries().map(|e| e.latency.as_millis()).collect();
    assert_eq!(kept, vec![2, 3]);
    assert_eq!(log.last().map(|e| e.latency.as_millis()), Some(3));
}

#[test]
fn latency_percentiles() {
    let mut log = PassLog::new();
    for ms in [10, 20, 30, 40, 50] {
        log.record(entry("query", ms, 1, 0.5));
    }
    assert_eq!(log.avg_latency(), Duration::from_millis(30));
    assert_eq!(log.latency_percentile(0.0), Duration::from_millis(10));
    assert_eq!(log.latency_percentile(1.0), Duration::from_millis(50));
    assert_eq!(PassLog::new().latency_percentile(0.5), Duration::ZERO);
}

#[test]
fn cancelled_passes_do_not_drag_confidence() {
    let mut log = PassLog::new();
    log.record(entry("query", 1, 1, 0.8));
    log.record(PassLogEntry {
        cancelled: true,
        ..entry("query", 1, 0, 0.0)
    });
    assert!((log.avg_confidence() - 0.8).abs() < 1e-12);
}

// ── Degradation ───────────────────────────────────────────────────────────

#[test]
fn recovery_closes_active_degradations() {
    let mut tracker = DegradationTracker::new();
    tracker.record(degradation("episodic", 5));
    tracker.record(degradation("episodic", 1));
    tracker.record(degradation("graph", 1));
    assert_eq!(tracker.active_degradations().len(), 3);

    assert_eq!(tracker.mark_recovered("episodic", fixed_now()), 2);
    assert_eq!(tracker.active_degradations().len(), 1);
    assert!(tracker
        .events()
        .iter()
        .filter(|t| t.event.component == "episodic")
        .all(|t| t.recovery_status == RecoveryStatus::Recovered));
    assert!(tracker.degraded_duration("episodic", fixed_now()).is_none());
}

#[test]
fn burst_of_degradations_warns() {
    let mut tracker = DegradationTracker::new();
    for m in 0..4 {
        tracker.record(degradation("working", m));
    }
    tracker.record(degradation("semantic", 2));

    let alerts = evaluate_alerts(&tracker, fixed_now());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::Warning);
    assert_eq!(alerts[0].component, "working");
}

#[test]
fn long_degradation_is_critical() {
    let mut tracker = DegradationTracker::new();
    tracker.record(degradation("graph", 25 * 60));
    let alerts = evaluate_alerts(&tracker, fixed_now());
    assert_eq!(alerts[0].level, AlertLevel::Critical);
}

#[test]
fn tracker_is_bounded() {
    let mut tracker = DegradationTracker::with_capacity(3);
    for m in 0..5 {
        tracker.record(degradation("working", m));
    }
    assert_eq!(tracker.events().len(), 3);
}

// ── Tracing ───────────────────────────────────────────────────────────────

#[test]
fn span_names_are_namespaced() {
    for name in [names::PROCESS, names::DECAY, names::FUSION] {
        assert!(name.starts_with("strata."));
    }
}

#[test]
fn tracing_init_twice_does_not_panic() {
    tracing_setup::init_tracing_with_filter("warn");
    tracing_setup::init_tracing_with_filter("debug");
    let _span = strata_observability::process_span!("query").entered();
    tracing_setup::events::pass_cancelled("retrieving");
}
