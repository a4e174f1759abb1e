//! Three-factor fusion score: tier relevance, salience, association strength.

use strata_core::config::FusionWeights;

use crate::candidate::FusionCandidate;

/// `(w1·relevance + w2·min(weight, 1) + w3·association) / (w1 + w2 + w3)`.
///
/// Normalising by the weight sum keeps the score in `[0, 1]` whatever the
/// configured weights add up to.
pub fn score(candidate: &FusionCandidate, weights: &FusionWeights) -> f64 {
    let total = weights.sum();
    if !(total.is_finite() && total > 0.0) {
        return 0.0;
    }
    let salience = candidate.node.weight.value().min(1.0);
    let raw = weights.relevance * candidate.tier_relevance
        + weights.weight * salience
        + weights.association * candidate.association_strength;
    (raw / total).clamp(0.0, 1.0)
}
