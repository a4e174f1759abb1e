use std::str::FromStr;

use strata_core::models::*;
use strata_core::{StrataError, TierKind};

#[test]
fn input_type_parses_case_insensitively() {
    assert_eq!(InputType::from_str("Query").unwrap(), InputType::Query);
    assert_eq!(InputType::from_str(" EVENT ").unwrap(), InputType::Event);
    assert_eq!(InputType::from_str("skill").unwrap(), InputType::Skill);
}

#[test]
fn unknown_input_type_is_malformed() {
    let err = InputType::from_str("telepathy").unwrap_err();
    assert!(matches!(err, StrataError::MalformedInput { .. }));
}

#[test]
fn only_queries_are_read_only() {
    for t in InputType::ALL {
        assert_eq!(t.target_tier().is_none(), t == InputType::Query);
    }
    assert_eq!(InputType::Emotion.target_tier(), Some(TierKind::Emotional));
}

#[test]
fn raw_input_collects_string_leaves() {
    let raw = RawInput::from(serde_json::json!({
        "location": "support_system",
        "actions": ["receive_complaint", "resolve"],
        "weight": 1.0
    }));
    let mut fragments = raw.text_fragments();
    fragments.sort_unstable();
    assert_eq!(
        fragments,
        vec!["receive_complaint", "resolve", "support_system"]
    );
    assert!(!raw.is_blank());
    assert!(RawInput::from("   ").is_blank());
}

#[test]
fn association_strength_is_clamped() {
    assert_eq!(Association::new(AssociationType::Causal, 1.7).strength, 1.0);
    assert_eq!(Association::new(AssociationType::Causal, f64::NAN).strength, 0.0);
}

#[test]
fn equal_strength_ties_break_by_priority() {
    let causal = Association::new(AssociationType::Causal, 0.6);
    let temporal = Association::new(AssociationType::Temporal, 0.6);
    assert!(causal.outranks(&temporal));
    assert!(!temporal.outranks(&causal));
    let stronger = Association::new(AssociationType::Temporal, 0.7);
    assert!(stronger.outranks(&causal));
}

#[test]
fn loop_state_cycles_back_to_idle() {
    let mut state = LoopState::Idle;
    let mut seen = vec![state];
    for _ in 0..6 {
        state = state.next();
        seen.push(state);
    }
    assert_eq!(state, LoopState::Idle);
    assert_eq!(seen.len(), 7);
    assert!(!LoopState::Responding.is_cancellation_point());
    assert!(LoopState::Expanding.is_cancellation_point());
}

#[test]
fn empty_fused_context_has_zero_confidence_and_marker() {
    let ctx = FusedContext::empty();
    assert_eq!(ctx.confidence, 0.0);
    assert!(ctx.is_empty());
    assert_eq!(ctx.text, strata_core::constants::NO_RELEVANT_MEMORY);
}

#[test]
fn cancelled_result_is_empty() {
    let r = ReasoningResult::cancelled(None);
    assert!(r.cancelled);
    assert_eq!(r.confidence, 0.0);
    assert!(r.activated_memories.is_empty());
}

#[test]
fn retrieval_query_tokenizes() {
    let q = RetrievalQuery::new("What about the complaint resolution?");
    assert!(q.tokens.contains("complaint"));
    assert!(q.tokens.contains("resolution"));
    assert!(!q.tokens.contains("the"));
    assert!(RetrievalQuery::new("the of").is_empty());
}
