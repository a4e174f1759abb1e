//! Golden scenarios from `test-fixtures/golden/scenarios`, replayed against a
//! fresh engine on a manual clock.

use std::sync::Arc;

use strata_core::errors::StrataError;
use strata_core::memory::NodeId;
use strata_core::models::RawInput;
use strata_core::{ManualClock, StrataConfig};
use strata_engine::Engine;
use test_fixtures::{fixed_now, list_fixtures, load_scenario};

fn error_kind(err: &StrataError) -> &'static str {
    match err {
        StrataError::MalformedInput { .. } => "malformed",
        StrataError::ConfigError(_) => "config",
        _ => "other",
    }
}

fn run_scenario(name: &str) {
    let scenario = load_scenario(name);
    let config = if scenario.config_toml.trim().is_empty() {
        StrataConfig::default()
    } else {
        StrataConfig::from_toml(&scenario.config_toml)
            .unwrap_or_else(|e| panic!("{name}: bad config: {e}"))
    };
    let clock = Arc::new(ManualClock::new(fixed_now()));
    let engine = Engine::new(config).unwrap().with_clock(clock.clone());

    let mut encoded: Vec<Option<NodeId>> = Vec::with_capacity(scenario.steps.len());
    for (i, step) in scenario.steps.iter().enumerate() {
        if step.advance_hours != 0 {
            clock.advance_hours(step.advance_hours);
        }
        if step.decay_before {
            engine.decay_tick().unwrap();
        }

        let input: RawInput = serde_json::from_value(step.input.clone()).unwrap();
        let outcome = engine.process_str(input, &step.input_type, &step.context);
        let expect = &step.expect;

        if let Some(kind) = &expect.error {
            let err = outcome
                .err()
                .unwrap_or_else(|| panic!("{name} step {i}: expected a {kind} error"));
            assert_eq!(error_kind(&err), kind, "{name} step {i}: {err}");
            encoded.push(None);
            continue;
        }

        let result = outcome.unwrap_or_else(|e| panic!("{name} step {i}: {e}"));
        assert!(!result.cancelled, "{name} step {i}");
        assert!((0.0..=1.0).contains(&result.confidence));

        if let Some(min) = expect.min_confidence {
            assert!(
                result.confidence >= min,
                "{name} step {i}: confidence {} < {min}",
                result.confidence
            );
        }
        if let Some(max) = expect.max_confidence {
            assert!(
                result.confidence <= max,
                "{name} step {i}: confidence {} > {max}",
                result.confidence
            );
        }
        if let Some(count) = expect.activated_count {
            assert_eq!(
                result.activated_memories.len(),
                count,
                "{name} step {i}: {:?}",
                result.activated_memories
            );
        }
        let activated = result.activated_ids();
        for &step_index in &expect.activates_steps {
            let id = encoded[step_index]
                .unwrap_or_else(|| panic!("{name}: step {step_index} stored nothing"));
            assert!(
                activated.contains(&id),
                "{name} step {i}: step {step_index} not activated"
            );
        }
        for needle in &expect.text_contains {
            assert!(
                result.response.text.contains(needle.as_str()),
                "{name} step {i}: {:?} missing from {:?}",
                needle,
                result.response.text
            );
        }
        encoded.push(result.encoded_node);
    }
}

#[test]
fn complaint_resolution() {
    run_scenario("complaint_resolution");
}

#[test]
fn cross_tier_expansion() {
    run_scenario("cross_tier_expansion");
}

#[test]
fn decay_then_evict() {
    run_scenario("decay_then_evict");
}

#[test]
fn malformed_input() {
    run_scenario("malformed_input");
}

#[test]
fn no_memory() {
    run_scenario("no_memory");
}

#[test]
fn every_scenario_file_has_a_test() {
    let covered = [
        "complaint_resolution",
        "cross_tier_expansion",
        "decay_then_evict",
        "malformed_input",
        "no_memory",
    ];
    for path in list_fixtures("scenarios") {
        let stem = path.file_stem().unwrap().to_string_lossy().to_string();
        assert!(covered.contains(&stem.as_str()), "no test for {stem}");
    }
}
