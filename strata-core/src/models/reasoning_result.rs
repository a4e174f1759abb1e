use serde::{Deserialize, Serialize};

use super::fused_context::FusedContext;
use crate::memory::{NodeId, TierKind};

/// How a memory entered the activation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "via", rename_all = "snake_case")]
pub enum ActivationSource {
    /// Direct tier retrieval hit.
    Retrieved,
    /// Pulled in through an association edge from a retrieved seed.
    Expanded { seed: NodeId },
}

/// A memory that contributed to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivatedMemory {
    pub id: NodeId,
    pub tier: TierKind,
    pub score: f64,
    pub source: ActivationSource,
}

/// What a processing pass hands back to its caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningResult {
    pub response: FusedContext,
    pub confidence: f64,
    /// Rank-ordered. Empty when nothing relevant was found.
    pub activated_memories: Vec<ActivatedMemory>,
    /// Id of the node written during encoding, if the input was not a query.
    pub encoded_node: Option<NodeId>,
    /// Recoverable failures swallowed during the pass.
    pub degradations: Vec<String>,
    pub cancelled: bool,
}

impl ReasoningResult {
    /// Partial result for a pass that was cancelled at a state boundary.
    pub fn cancelled(encoded_node: Option<NodeId>) -> Self {
        Self {
            response: FusedContext::empty(),
            confidence: 0.0,
            activated_memories: Vec::new(),
            encoded_node,
            degradations: Vec::new(),
            cancelled: true,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    pub fn activated_ids(&self) -> Vec<NodeId> {
        self.activated_memories.iter().map(|m| m.id).collect()
    }
}
