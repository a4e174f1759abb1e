use strata_core::memory::{NodeId, TierKind};

/// Whether a node at `weight` falls out of a tier with the given threshold.
/// The boundary is inclusive: a node sitting exactly on the threshold goes.
pub fn should_evict(weight: f64, threshold: f64) -> bool {
    weight <= threshold
}

/// Eviction verdict with enough context for an audit log line.
#[derive(Debug, Clone, PartialEq)]
pub struct EvictionDecision {
    pub node_id: NodeId,
    pub tier: TierKind,
    pub evict: bool,
    pub weight: f64,
    pub threshold: f64,
    pub reason: String,
}

impl EvictionDecision {
    /// Evaluate a post-decay weight against a tier threshold.
    pub fn evaluate(node_id: NodeId, tier: TierKind, weight: f64, threshold: f64) -> Self {
        let evict = should_evict(weight, threshold);
        let reason = if evict {
            format!("weight {weight:.3} at or below {tier} threshold {threshold:.3}")
        } else {
            "weight above threshold".to_string()
        };
        Self {
            node_id,
            tier,
            evict,
            weight,
            threshold,
            reason,
        }
    }
}
