//! Ranking pipeline: score → deduplicate → order.

pub mod dedup;
pub mod scorer;

use std::cmp::Ordering;

use strata_core::config::FusionWeights;

use crate::candidate::FusionCandidate;

/// A candidate with its fused score.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub candidate: FusionCandidate,
    /// In `[0, 1]`.
    pub score: f64,
}

/// Score every candidate, keep the best entry per node, and order the result.
pub fn rank(candidates: Vec<FusionCandidate>, weights: &FusionWeights) -> Vec<RankedCandidate> {
    let scored = candidates
        .into_iter()
        .map(|c| RankedCandidate {
            score: scorer::score(&c, weights),
            candidate: c,
        })
        .collect();

    let mut ranked = dedup::deduplicate(scored);
    ranked.sort_by(rank_order);
    ranked
}

/// Score desc, relevance desc, weight desc, id asc.
pub fn rank_order(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| {
            b.candidate
                .tier_relevance
                .total_cmp(&a.candidate.tier_relevance)
        })
        .then_with(|| {
            b.candidate
                .node
                .weight
                .value()
                .total_cmp(&a.candidate.node.weight.value())
        })
        .then_with(|| a.candidate.id().cmp(&b.candidate.id()))
}
