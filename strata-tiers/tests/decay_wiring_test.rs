use chrono::Duration;
use strata_core::config::{TierConfig, TiersConfig};
use strata_core::memory::*;
use strata_core::models::RetrievalQuery;
use strata_core::traits::IMemoryTier;
use strata_decay::DecayScheduler;
use strata_tiers::{build_all, TierStore};
use test_fixtures::*;

#[test]
fn decay_then_evict_below_threshold() {
    let now = fixed_now();
    let mut config = TierConfig::working();
    config.eviction_threshold = 0.1;
    let mut tier = TierStore::new(TierKind::Working, config);
    let n = working_node("draft the quarterly report", 0.05, now);
    let id = n.id;
    tier.store(n).unwrap();

    let evicted = tier.decay_tick(now);
    assert_eq!(evicted, vec![id]);
    assert!(tier
        .retrieve(&RetrievalQuery::new("quarterly report"), 5, now)
        .is_empty());
}

#[test]
fn decay_lowers_weight_and_attention_together() {
    let now = fixed_now();
    let mut tier = TierStore::new(TierKind::Working, TierConfig::working());
    let n = working_node("review pull request", 1.0, now);
    let id = n.id;
    tier.store(n).unwrap();

    assert!(tier.decay_tick(now + Duration::hours(1)).is_empty());
    let node = tier.get(&id).unwrap();
    let expected = (-0.7f64).exp();
    assert!((node.weight.value() - expected).abs() < 1e-9);
    assert!((node.attention().unwrap() - expected).abs() < 1e-9);
}

#[test]
fn touch_resets_the_decay_anchor() {
    let now = fixed_now();
    let mut tier = TierStore::new(TierKind::Episodic, TierConfig::episodic());
    let n = node(NodeContent::Episodic(complaint_event()), 1.0, now);
    let id = n.id;
    tier.store(n).unwrap();

    tier.decay_tick(now + Duration::hours(48));
    let decayed = tier.get(&id).unwrap().weight.value();
    assert!(decayed < 1.0);

    tier.touch(&id, now + Duration::hours(48)).unwrap();
    let touched = tier.get(&id).unwrap().clone();
    assert!(touched.weight.value() > decayed);
    assert_eq!(touched.anchor_weight, touched.weight);

    // Immediately after the touch no time has passed on the new anchor.
    tier.decay_tick(now + Duration::hours(48));
    assert_eq!(tier.get(&id).unwrap().weight, touched.weight);
}

#[test]
fn scheduler_drives_every_tier() {
    let now = fixed_now();
    let mut tiers = build_all(&TiersConfig::default());
    tiers[TierKind::Working.index()]
        .store(working_node("ephemeral thought", 1.0, now))
        .unwrap();
    tiers[TierKind::Semantic.index()]
        .store(node(semantic_content("rust", "ownership prevents data races"), 1.0, now))
        .unwrap();

    let mut scheduler = DecayScheduler::new(60);
    let later = now + Duration::hours(12);
    let mut refs: Vec<&mut dyn IMemoryTier> =
        tiers.iter_mut().map(|t| t as &mut dyn IMemoryTier).collect();
    let report = scheduler.tick(later, &mut refs);

    // exp(-0.7 * 12) ≈ 2e-4, well below the working threshold.
    assert_eq!(report.evicted_in(TierKind::Working), 1);
    assert_eq!(report.evicted_in(TierKind::Semantic), 0);
    assert_eq!(report.total_evicted, 1);
    assert_eq!(scheduler.evictions_total(), 1);
    assert!(scheduler.tick_if_due(later, &mut refs).is_none());
}
