use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_core::config::FusionConfig;
use strata_fusion::{FusionCandidate, FusionEngine};
use test_fixtures::*;

fn bench_fuse(c: &mut Criterion) {
    let now = fixed_now();
    let candidates: Vec<FusionCandidate> = (0..200)
        .map(|i| {
            let n = node(
                episodic_content(
                    &format!("event {i}"),
                    Some("support_system"),
                    &["alice"],
                    &["receive_complaint", "resolve"],
                    &["customer_satisfied"],
                ),
                (i % 10) as f64 / 10.0,
                now,
            );
            FusionCandidate::retrieved(n, (i % 7) as f64 / 7.0)
        })
        .collect();
    let engine = FusionEngine::new(FusionConfig::default());

    c.bench_function("fuse_200_candidates", |b| {
        b.iter(|| engine.fuse(black_box(candidates.clone())))
    });
}

criterion_group!(benches, bench_fuse);
criterion_main!(benches);
