use serde::{Deserialize, Serialize};

use crate::memory::MemoryNode;

/// A node returned by tier retrieval together with its tier-relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredNode {
    pub node: MemoryNode,
    /// Tier-specific relevance in `[0, 1]`.
    pub relevance: f64,
}

impl ScoredNode {
    pub fn new(node: MemoryNode, relevance: f64) -> Self {
        Self { node, relevance }
    }
}
