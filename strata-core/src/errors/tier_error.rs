use crate::memory::{NodeId, TierKind};

/// Tier storage errors.
///
/// `NotFound` is a benign race with decay or eviction. Callers treat it as
/// "already gone" and carry on.
#[derive(Debug, thiserror::Error)]
pub enum TierError {
    #[error("{tier} tier full: minimum resident weight {min_weight:.3} >= incoming {incoming_weight:.3} and protect-minimum is set")]
    Rejected {
        tier: TierKind,
        min_weight: f64,
        incoming_weight: f64,
    },

    #[error("node {id} not found in {tier} tier")]
    NotFound { tier: TierKind, id: NodeId },

    #[error("{tier} tier cannot hold {found} content")]
    ContentMismatch { tier: TierKind, found: TierKind },
}

impl TierError {
    /// True for the expected eviction race.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
