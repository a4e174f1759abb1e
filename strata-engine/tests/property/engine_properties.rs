use std::sync::Arc;

use proptest::prelude::*;
use serde_json::Map;
use strata_core::memory::TierKind;
use strata_core::models::InputType;
use strata_core::{ManualClock, StrataConfig};
use strata_engine::Engine;
use test_fixtures::fixed_now;

const WORDS: &[&str] = &[
    "payment", "refund", "report", "deploy", "invoice", "checkout", "review", "alice",
];

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..4).prop_map(|w| w.join(" "))
}

fn step() -> impl Strategy<Value = (InputType, String, i64)> {
    (
        prop::sample::select(vec![InputType::Text, InputType::Event, InputType::Query]),
        phrase(),
        0i64..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn passes_keep_engine_invariants(steps in prop::collection::vec(step(), 1..25)) {
        let mut config = StrataConfig::default();
        config.tiers.working.capacity = 4;
        config.tiers.episodic.capacity = 6;
        let window = config.fusion.window;
        let clock = Arc::new(ManualClock::new(fixed_now()));
        let engine = Engine::new(config).unwrap().with_clock(clock.clone());
        let context = Map::new();

        for (input_type, text, hours) in steps {
            clock.advance_hours(hours);
            let result = engine.process(text.into(), input_type, &context).unwrap();

            prop_assert!((0.0..=1.0).contains(&result.confidence));
            prop_assert_eq!(result.confidence == 0.0, result.activated_memories.is_empty());
            prop_assert!(result.activated_memories.len() <= window);
            if let Some(id) = result.encoded_node {
                prop_assert!(!result.activated_ids().contains(&id));
            }
            for memory in &result.activated_memories {
                prop_assert!(engine.contains(&memory.id));
            }

            let status = engine.get_memory_status().unwrap();
            for kind in TierKind::ALL {
                let tier = status.per_tier[&kind];
                prop_assert!(tier.count <= tier.capacity);
            }
        }
    }
}
