use chrono::Duration;
use proptest::prelude::*;
use strata_core::config::TierConfig;
use strata_core::memory::*;
use strata_core::traits::IMemoryTier;
use strata_tiers::TierStore;
use test_fixtures::*;

// ── Capacity invariant ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn len_never_exceeds_capacity(
        capacity in 1usize..12,
        weights in proptest::collection::vec(0.0f64..2.0, 0..60),
        protect in any::<bool>(),
    ) {
        let now = fixed_now();
        let mut config = TierConfig::working();
        config.capacity = capacity;
        config.protect_minimum = protect;
        let mut tier = TierStore::new(TierKind::Working, config);
        for (i, w) in weights.into_iter().enumerate() {
            let _ = tier.store(working_node(&format!("n{i}"), w, now));
            prop_assert!(tier.len() <= capacity);
        }
    }
}

// ── Eviction correctness ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn full_tier_evicts_the_minimum(
        weights in proptest::collection::btree_set(1u32..10_000, 2..10),
        incoming in 1u32..10_000,
    ) {
        let now = fixed_now();
        let weights: Vec<f64> = weights.into_iter().map(|w| w as f64 / 1000.0).collect();
        let mut config = TierConfig::working();
        config.capacity = weights.len();
        let mut tier = TierStore::new(TierKind::Working, config);
        let mut min_id = None;
        let mut min_w = f64::INFINITY;
        for w in &weights {
            let n = working_node("x1", *w, now);
            if *w < min_w {
                min_w = *w;
                min_id = Some(n.id);
            }
            tier.store(n).unwrap();
        }
        let evicted = tier.store(working_node("x2", incoming as f64 / 1000.0, now)).unwrap();
        prop_assert_eq!(evicted.map(|n| n.id), min_id);
    }
}

// ── Weight monotonicity between accesses ─────────────────────────────────

proptest! {
    #[test]
    fn decay_ticks_never_raise_weight(
        hours in proptest::collection::vec(0i64..48, 1..10),
        initial in 0.2f64..1.5,
    ) {
        let now = fixed_now();
        let mut config = TierConfig::semantic();
        config.eviction_threshold = 0.0;
        let mut tier = TierStore::new(TierKind::Semantic, config);
        let n = node(semantic_content("c1", "s1"), initial, now);
        let id = n.id;
        tier.store(n).unwrap();
        let mut t = now;
        let mut previous = initial;
        for h in hours {
            t += Duration::hours(h);
            tier.decay_tick(t);
            let Some(current) = tier.get(&id).map(|n| n.weight.value()) else { break };
            prop_assert!(current <= previous + 1e-12);
            previous = current;
        }
    }
}
