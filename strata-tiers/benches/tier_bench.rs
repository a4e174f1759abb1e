use chrono::Duration;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use strata_core::config::TierConfig;
use strata_core::models::RetrievalQuery;
use strata_core::traits::IMemoryTier;
use strata_core::TierKind;
use strata_tiers::TierStore;
use test_fixtures::*;

fn full_episodic_tier() -> TierStore {
    let now = fixed_now();
    let config = TierConfig::episodic();
    let capacity = config.capacity;
    let mut tier = TierStore::new(TierKind::Episodic, config);
    for i in 0..capacity {
        let content = episodic_content(
            &format!("ticket {i} escalated to tier two"),
            Some("helpdesk"),
            &["agent"],
            &["escalate"],
            &["pending"],
        );
        tier.store(node(content, 1.0, now - Duration::minutes(i as i64)))
            .unwrap();
    }
    tier
}

fn bench_decay_tick_full_tier(c: &mut Criterion) {
    let later = fixed_now() + Duration::hours(6);
    c.bench_function("decay_tick_full_episodic_tier", |b| {
        b.iter_batched(
            full_episodic_tier,
            |mut tier| tier.decay_tick(later),
            BatchSize::LargeInput,
        );
    });
}

fn bench_retrieve_full_tier(c: &mut Criterion) {
    let query = RetrievalQuery::new("escalated ticket");
    let now = fixed_now();
    c.bench_function("retrieve_top5_full_episodic_tier", |b| {
        b.iter_batched(
            full_episodic_tier,
            |mut tier| tier.retrieve(&query, 5, now),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_decay_tick_full_tier, bench_retrieve_full_tier);
criterion_main!(benches);
