use serde::{Deserialize, Serialize};

use crate::constants::NO_RELEVANT_MEMORY;
use crate::memory::{NodeId, TierKind};

/// One rendered contribution to a fused context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedSection {
    pub node_id: NodeId,
    pub tier: TierKind,
    pub score: f64,
    pub rendered: String,
}

/// The merged context produced from a set of activated nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedContext {
    /// All sections rendered and joined, grouped by tier.
    pub text: String,
    /// Per-node sections in rank order.
    pub sections: Vec<FusedSection>,
    /// In `[0, 1]`. Zero exactly when nothing contributed.
    pub confidence: f64,
    /// Rank-ordered ids of the nodes that made it into the window.
    pub contributing_node_ids: Vec<NodeId>,
    /// Candidates considered before the window cut.
    pub candidates_considered: usize,
}

impl FusedContext {
    /// The valid, expected result for an empty activation.
    pub fn empty() -> Self {
        Self {
            text: NO_RELEVANT_MEMORY.to_string(),
            sections: Vec::new(),
            confidence: 0.0,
            contributing_node_ids: Vec::new(),
            candidates_considered: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contributing_node_ids.is_empty()
    }
}
