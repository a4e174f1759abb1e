use strata_core::memory::{MemoryNode, NodeId};
use strata_core::models::ActivationSource;

/// One activated node waiting to be fused.
#[derive(Debug, Clone)]
pub struct FusionCandidate {
    pub node: MemoryNode,
    /// Tier relevance in `[0, 1]`.
    pub tier_relevance: f64,
    /// Strength of the link to the seed that activated it; 1 for direct hits.
    pub association_strength: f64,
    pub source: ActivationSource,
}

impl FusionCandidate {
    /// A direct tier retrieval hit.
    pub fn retrieved(node: MemoryNode, relevance: f64) -> Self {
        Self {
            node,
            tier_relevance: unit(relevance),
            association_strength: 1.0,
            source: ActivationSource::Retrieved,
        }
    }

    /// A node reached over an association edge. Its relevance is inherited
    /// from the seed, scaled by the edge strength.
    pub fn expanded(
        node: MemoryNode,
        seed: NodeId,
        seed_relevance: f64,
        edge_strength: f64,
    ) -> Self {
        let edge_strength = unit(edge_strength);
        Self {
            node,
            tier_relevance: unit(seed_relevance) * edge_strength,
            association_strength: edge_strength,
            source: ActivationSource::Expanded { seed },
        }
    }

    pub fn id(&self) -> NodeId {
        self.node.id
    }

    pub fn is_retrieved(&self) -> bool {
        matches!(self.source, ActivationSource::Retrieved)
    }
}

fn unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
