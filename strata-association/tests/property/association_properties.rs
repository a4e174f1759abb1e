use chrono::Duration;
use proptest::prelude::*;
use strata_association::{AssociationDetector, AssociationEngine};
use strata_core::config::AssociationConfig;
use strata_core::memory::*;
use strata_core::models::{Association, AssociationType};
use test_fixtures::*;

const WORDS: &[&str] = &[
    "checkout", "payment", "refund", "alice", "bob", "invoice", "outage", "resolve",
];

fn words() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(WORDS), 0..4)
}

fn episode() -> impl Strategy<Value = (Vec<&'static str>, Option<&'static str>, Vec<&'static str>, Vec<&'static str>, i64)> {
    (
        words(),
        prop::option::of(prop::sample::select(WORDS)),
        words(),
        words(),
        0i64..7_200,
    )
}

fn build(
    (participants, location, actions, results, offset): (Vec<&str>, Option<&str>, Vec<&str>, Vec<&str>, i64),
) -> MemoryNode {
    node(
        episodic_content("", location, &participants, &actions, &results),
        1.0,
        fixed_now() + Duration::seconds(offset),
    )
}

fn kind() -> impl Strategy<Value = AssociationType> {
    prop::sample::select(AssociationType::ALL.to_vec())
}

proptest! {
    #[test]
    fn detection_is_order_independent(a in episode(), b in episode()) {
        let detector = AssociationDetector::from_config(&AssociationConfig::default());
        let (a, b) = (build(a), build(b));
        let ab = detector.detect(&a, &b);
        let ba = detector.detect(&b, &a);
        prop_assert_eq!(ab, ba);
        if let Some(assoc) = ab {
            prop_assert!((0.0..=1.0).contains(&assoc.strength));
        }
    }

    #[test]
    fn repeated_edges_never_duplicate(
        strength in 0.0f64..=1.0,
        repeats in 1usize..6,
        kind in kind(),
    ) {
        let engine = AssociationEngine::from_config(&AssociationConfig::default());
        let (a, b) = (NodeId::new(), NodeId::new());
        let assoc = Association::new(kind, strength);
        for i in 0..repeats {
            if i % 2 == 0 {
                engine.add_edge(a, b, assoc).unwrap();
            } else {
                engine.add_edge(b, a, assoc).unwrap();
            }
        }
        prop_assert_eq!(engine.edge_count().unwrap(), 1);
        let n = engine.neighbors(&a, 0.0).unwrap();
        prop_assert_eq!(n.len(), 1);
        prop_assert!((n[0].association.strength - strength).abs() < 1e-9);
    }

    #[test]
    fn smoothed_strength_stays_between_observations(
        first in 0.0f64..=1.0,
        second in 0.0f64..=1.0,
    ) {
        let engine = AssociationEngine::from_config(&AssociationConfig::default());
        let (a, b) = (NodeId::new(), NodeId::new());
        engine.add_edge(a, b, Association::new(AssociationType::Semantic, first)).unwrap();
        engine.add_edge(a, b, Association::new(AssociationType::Semantic, second)).unwrap();
        let s = engine.neighbors(&a, 0.0).unwrap()[0].association.strength;
        prop_assert!(s >= first.min(second) - 1e-12);
        prop_assert!(s <= first.max(second) + 1e-12);
    }
}
