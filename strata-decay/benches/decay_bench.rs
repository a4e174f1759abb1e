use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use strata_core::config::TierConfig;
use strata_core::memory::*;
use strata_decay::{curve_for, formula};

fn make_nodes(n: usize) -> Vec<MemoryNode> {
    let now = Utc::now();
    (0..n)
        .map(|i| {
            let mut node = MemoryNode::new(
                NodeContent::Working(WorkingContent {
                    text: format!("item {i}"),
                    attention_score: 1.0,
                }),
                1.0,
                now - Duration::minutes(i as i64),
            )
            .unwrap();
            node.access_count = (i % 7) as u64;
            node
        })
        .collect()
}

fn bench_formula_per_curve(c: &mut Criterion) {
    let nodes = make_nodes(1_000);
    let now = Utc::now();
    for cfg in [
        TierConfig::working(),
        TierConfig::episodic(),
        TierConfig::semantic(),
    ] {
        let curve = curve_for(&cfg.decay);
        c.bench_function(&format!("decay_1k_{}", curve.name()), |b| {
            b.iter(|| {
                for node in &nodes {
                    black_box(formula::compute(curve.as_ref(), node, now));
                }
            });
        });
    }
}

criterion_group!(benches, bench_formula_per_curve);
criterion_main!(benches);
