use proptest::prelude::*;
use strata_core::config::{FusionConfig, FusionWeights};
use strata_core::memory::NodeId;
use strata_fusion::{FusionCandidate, FusionEngine};
use test_fixtures::*;

fn candidates() -> impl Strategy<Value = Vec<(f64, f64, Option<f64>)>> {
    prop::collection::vec((0.0f64..=1.0, 0.0f64..=2.0, prop::option::of(0.0f64..=1.0)), 0..20)
}

fn build(specs: &[(f64, f64, Option<f64>)]) -> Vec<FusionCandidate> {
    let now = fixed_now();
    specs
        .iter()
        .map(|&(relevance, weight, edge)| {
            let n = working_node("item", weight, now);
            match edge {
                None => FusionCandidate::retrieved(n, relevance),
                Some(s) => FusionCandidate::expanded(n, NodeId::new(), relevance, s),
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn fusion_is_deterministic(
        specs in candidates(),
        window in 1usize..10,
        wr in 0.0f64..3.0,
        ww in 0.0f64..3.0,
        wa in 0.1f64..3.0,
    ) {
        let engine = FusionEngine::new(FusionConfig {
            window,
            sparse_penalty: 0.6,
            weights: FusionWeights { relevance: wr, weight: ww, association: wa },
        });
        let input = build(&specs);
        let mut reversed = input.clone();
        reversed.reverse();

        let a = engine.fuse(input.clone());
        let b = engine.fuse(input);
        let c = engine.fuse(reversed);

        prop_assert_eq!(&a.context, &b.context);
        prop_assert_eq!(&a.context.contributing_node_ids, &c.context.contributing_node_ids);
        prop_assert_eq!(a.context.confidence, c.context.confidence);
    }

    #[test]
    fn confidence_is_bounded(specs in candidates(), window in 1usize..10) {
        let engine = FusionEngine::new(FusionConfig { window, ..FusionConfig::default() });
        let out = engine.fuse(build(&specs));
        prop_assert!((0.0..=1.0).contains(&out.context.confidence));
        prop_assert!(out.context.sections.len() <= window);
        if specs.is_empty() {
            prop_assert_eq!(out.context.confidence, 0.0);
        } else {
            prop_assert!(!out.context.sections.is_empty());
        }
    }
}
