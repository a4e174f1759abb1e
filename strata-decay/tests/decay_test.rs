use chrono::{Duration, Utc};
use strata_core::config::{DecayFunction, TierConfig};
use strata_core::memory::*;
use strata_core::models::DecayReport;
use strata_core::traits::IDecayCurve;
use strata_core::TierKind;
use strata_decay::eviction::{should_evict, EvictionDecision};
use strata_decay::{curve_for, formula, DecayScheduler, EbbinghausCurve, ExponentialCurve, PowerLawCurve};

fn node_accessed_hours_ago(weight: f64, hours: i64, access_count: u64) -> (MemoryNode, chrono::DateTime<Utc>) {
    let now = Utc::now();
    let mut node = MemoryNode::new(
        NodeContent::Working(WorkingContent {
            text: "focus".into(),
            attention_score: 1.0,
        }),
        weight,
        now - Duration::hours(hours),
    )
    .unwrap();
    node.access_count = access_count;
    (node, now)
}

// ── Curves ────────────────────────────────────────────────────────────────

#[test]
fn exponential_matches_closed_form() {
    let curve = ExponentialCurve::new(0.7);
    let w = curve.decayed_weight(1.0, 2.0, 0);
    assert!((w - (-1.4f64).exp()).abs() < 1e-12);
    assert!((curve.half_life_hours() - std::f64::consts::LN_2 / 0.7).abs() < 1e-12);
}

#[test]
fn power_law_matches_closed_form() {
    let curve = PowerLawCurve::new(0.5);
    assert!((curve.decayed_weight(2.0, 3.0, 0) - 1.0).abs() < 1e-12);
}

#[test]
fn ebbinghaus_slows_with_access() {
    let curve = EbbinghausCurve::new(72.0, 0.5);
    let cold = curve.decayed_weight(1.0, 72.0, 0);
    let rehearsed = curve.decayed_weight(1.0, 72.0, 4);
    assert!((cold - (-1.0f64).exp()).abs() < 1e-12);
    assert!(rehearsed > cold);
    assert!((rehearsed - (-1.0f64 / 3.0).exp()).abs() < 1e-12);
}

#[test]
fn zero_elapsed_keeps_weight() {
    for f in [
        DecayFunction::Exponential { lambda: 0.7 },
        DecayFunction::PowerLaw { alpha: 0.3 },
        DecayFunction::Ebbinghaus {
            strength: 10.0,
            beta: 1.0,
        },
    ] {
        let curve = curve_for(&f);
        assert_eq!(curve.name(), f.name());
        assert_eq!(curve.decayed_weight(0.8, 0.0, 0), 0.8);
        assert_eq!(curve.decayed_weight(0.8, -5.0, 0), 0.8);
        assert_eq!(curve.decayed_weight(0.8, f64::NAN, 0), 0.8);
    }
}

#[test]
fn working_decays_fastest_and_semantic_slowest() {
    let at_one_day = |cfg: TierConfig| curve_for(&cfg.decay).decayed_weight(1.0, 24.0, 0);
    let working = at_one_day(TierConfig::working());
    let episodic = at_one_day(TierConfig::episodic());
    let emotional = at_one_day(TierConfig::emotional());
    let semantic = at_one_day(TierConfig::semantic());
    let procedural = at_one_day(TierConfig::procedural());

    assert!(working < episodic);
    assert!(working < emotional);
    assert!(episodic < semantic);
    assert!(emotional < semantic);
    assert!(episodic < procedural);
}

// ── Formula ───────────────────────────────────────────────────────────────

#[test]
fn formula_restarts_from_anchor_but_never_raises() {
    let (mut node, now) = node_accessed_hours_ago(1.0, 1, 0);
    let curve = ExponentialCurve::new(0.7);

    let first = formula::compute(&curve, &node, now);
    assert!((first - (-0.7f64).exp()).abs() < 1e-9);

    // Weight already below what the curve would give: keep the lower value.
    node.weight = Weight::new(0.1);
    let second = formula::compute(&curve, &node, now);
    assert_eq!(second, 0.1);
}

#[test]
fn breakdown_exposes_inputs() {
    let (node, now) = node_accessed_hours_ago(0.9, 3, 2);
    let curve = EbbinghausCurve::new(72.0, 0.5);
    let b = formula::compute_breakdown(&curve, &node, now);
    assert_eq!(b.curve, "ebbinghaus");
    assert_eq!(b.access_count, 2);
    assert!((b.elapsed_hours - 3.0).abs() < 1e-6);
    assert_eq!(b.anchor_weight, 0.9);
    assert_eq!(b.previous_weight, 0.9);
    assert!(b.final_weight <= b.previous_weight);
    assert_eq!(b.final_weight, b.curve_weight.min(b.previous_weight));
}

// ── Eviction ──────────────────────────────────────────────────────────────

#[test]
fn eviction_boundary_is_inclusive() {
    assert!(should_evict(0.1, 0.1));
    assert!(should_evict(0.05, 0.1));
    assert!(!should_evict(0.11, 0.1));
    assert!(should_evict(0.0, 0.0));
}

#[test]
fn eviction_decision_carries_reason() {
    let d = EvictionDecision::evaluate(NodeId::new(), TierKind::Working, 0.05, 0.1);
    assert!(d.evict);
    assert!(d.reason.contains("working"));
    let keep = EvictionDecision::evaluate(NodeId::new(), TierKind::Working, 0.5, 0.1);
    assert!(!keep.evict);
}

// ── Scheduler ─────────────────────────────────────────────────────────────

#[test]
fn scheduler_is_due_on_first_call_then_waits_for_interval() {
    let now = Utc::now();
    let mut scheduler = DecayScheduler::new(60);
    assert!(scheduler.is_due(now));

    let report = scheduler.tick(now, &mut []);
    assert_eq!(report.total_evicted, 0);
    assert_eq!(scheduler.ticks_total(), 1);
    assert_eq!(scheduler.last_tick(), Some(now));

    assert!(!scheduler.is_due(now + Duration::seconds(59)));
    assert!(scheduler
        .tick_if_due(now + Duration::seconds(30), &mut [])
        .is_none());
    assert!(scheduler
        .tick_if_due(now + Duration::seconds(60), &mut [])
        .is_some());
    assert_eq!(scheduler.ticks_total(), 2);
}

#[test]
fn scheduler_accumulates_evictions_from_reports() {
    let now = Utc::now();
    let mut scheduler = DecayScheduler::default();
    let mut report = DecayReport::new(now);
    report.record(TierKind::Working, vec![NodeId::new(), NodeId::new()]);
    report.record(TierKind::Episodic, vec![NodeId::new()]);
    scheduler.complete(&report);
    assert_eq!(scheduler.evictions_total(), 3);
    assert_eq!(report.evicted_in(TierKind::Working), 2);
    assert_eq!(report.evicted_in(TierKind::Semantic), 0);
}

#[test]
fn last_tick_never_moves_backwards() {
    let now = Utc::now();
    let mut scheduler = DecayScheduler::new(0);
    scheduler.tick(now, &mut []);
    scheduler.tick(now - Duration::hours(1), &mut []);
    assert_eq!(scheduler.last_tick(), Some(now));
}
