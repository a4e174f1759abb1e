use strata_core::config::{FusionConfig, FusionWeights};
use strata_core::constants::NO_RELEVANT_MEMORY;
use strata_core::memory::*;
use strata_core::models::ActivationSource;
use strata_fusion::confidence::{confidence, sparse_multiplier};
use strata_fusion::ranking::scorer;
use strata_fusion::{FusionCandidate, FusionEngine};
use test_fixtures::*;

fn engine(window: usize) -> FusionEngine {
    FusionEngine::new(FusionConfig {
        window,
        ..FusionConfig::default()
    })
}

// ── Empty input ───────────────────────────────────────────────────────────

#[test]
fn no_candidates_means_no_relevant_memory() {
    let out = engine(5).fuse(Vec::new());
    assert_eq!(out.context.confidence, 0.0);
    assert_eq!(out.context.text, NO_RELEVANT_MEMORY);
    assert!(out.context.is_empty());
    assert!(out.ranked.is_empty());
}

// ── Scoring ───────────────────────────────────────────────────────────────

#[test]
fn equal_thirds_average_the_three_terms() {
    let n = working_node("x", 0.5, fixed_now());
    let c = FusionCandidate::retrieved(n, 0.8);
    let s = scorer::score(&c, &FusionWeights::default());
    assert!((s - (0.8 + 0.5 + 1.0) / 3.0).abs() < 1e-9);
}

#[test]
fn salience_term_saturates_at_one() {
    let heavy = FusionCandidate::retrieved(working_node("x", 1.8, fixed_now()), 0.5);
    let unit = FusionCandidate::retrieved(working_node("y", 1.0, fixed_now()), 0.5);
    let w = FusionWeights::default();
    assert_eq!(scorer::score(&heavy, &w), scorer::score(&unit, &w));
}

#[test]
fn weights_are_normalised_by_their_sum() {
    let c = FusionCandidate::retrieved(working_node("x", 1.0, fixed_now()), 1.0);
    let w = FusionWeights {
        relevance: 2.0,
        weight: 2.0,
        association: 2.0,
    };
    assert!((scorer::score(&c, &w) - 1.0).abs() < 1e-12);
}

#[test]
fn expanded_candidates_inherit_scaled_relevance() {
    let seed = NodeId::new();
    let c = FusionCandidate::expanded(working_node("x", 1.0, fixed_now()), seed, 0.8, 0.5);
    assert!((c.tier_relevance - 0.4).abs() < 1e-12);
    assert_eq!(c.association_strength, 0.5);
    assert_eq!(c.source, ActivationSource::Expanded { seed });
}

// ── Ranking / dedup / window ──────────────────────────────────────────────

#[test]
fn duplicates_keep_their_best_score() {
    let now = fixed_now();
    let n = working_node("dup", 1.0, now);
    let id = n.id;
    let weak = FusionCandidate::expanded(n.clone(), NodeId::new(), 0.2, 0.5);
    let strong = FusionCandidate::retrieved(n, 0.9);

    let out = engine(5).fuse(vec![weak, strong]);
    assert_eq!(out.context.contributing_node_ids, vec![id]);
    assert_eq!(out.ranked[0].candidate.source, ActivationSource::Retrieved);
    assert_eq!(out.context.candidates_considered, 2);
}

#[test]
fn window_bounds_the_context() {
    let now = fixed_now();
    let candidates: Vec<FusionCandidate> = (0..6)
        .map(|i| FusionCandidate::retrieved(working_node("n", 1.0, now), 0.1 * (i + 1) as f64))
        .collect();
    let best = candidates[5].node.id;

    let out = engine(3).fuse(candidates);
    assert_eq!(out.context.sections.len(), 3);
    assert_eq!(out.context.contributing_node_ids[0], best);
    let scores: Vec<f64> = out.context.sections.iter().map(|s| s.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn text_groups_sections_by_tier() {
    let now = fixed_now();
    let fact = node(semantic_content("billing", "monthly"), 1.0, now);
    let event = node(
        NodeContent::Episodic(complaint_event()),
        1.0,
        now,
    );
    let out = engine(5).fuse(vec![
        FusionCandidate::retrieved(fact, 0.9),
        FusionCandidate::retrieved(event, 0.5),
    ]);
    let text = &out.context.text;
    let episodic = text.find("[episodic]").unwrap();
    let semantic = text.find("[semantic]").unwrap();
    assert!(episodic < semantic);
    assert!(text.contains("support_system"));
    assert!(text.contains("receive_complaint"));
    assert!(text.contains("- billing: monthly"));
}

// ── Confidence ────────────────────────────────────────────────────────────

#[test]
fn confidence_is_rank_weighted() {
    // (1·1.0 + ½·0.4) / 1.5 = 0.8
    let c = confidence(&[1.0, 0.4], 2, 0.6);
    assert!((c - 0.8).abs() < 1e-12);
}

#[test]
fn sparse_evidence_is_penalised() {
    assert_eq!(sparse_multiplier(5, 5, 0.6), 1.0);
    assert!((sparse_multiplier(0, 5, 0.6) - 0.6).abs() < 1e-12);
    assert!((sparse_multiplier(1, 5, 0.6) - 0.68).abs() < 1e-12);
    assert!((confidence(&[1.0], 5, 0.6) - 0.68).abs() < 1e-12);
}

#[test]
fn single_hit_confidence_is_positive_but_penalised() {
    let out = engine(8).fuse(vec![FusionCandidate::retrieved(
        working_node("x", 1.0, fixed_now()),
        1.0,
    )]);
    assert!(out.context.confidence > 0.0);
    assert!(out.context.confidence < 1.0);
}
