use chrono::{DateTime, Utc};

use crate::errors::TierError;
use crate::memory::{MemoryNode, NodeId, TierKind};
use crate::models::{RetrievalQuery, ScoredNode, TierStatus};

/// Bounded, typed storage for one tier.
///
/// Implementations are not internally synchronized; the owner serializes
/// mutation (the engine keeps each tier behind its own lock).
pub trait IMemoryTier: Send + Sync {
    fn kind(&self) -> TierKind;

    fn capacity(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a node, evicting the weakest resident if the tier is full.
    /// Returns the evicted node, if any.
    fn store(&mut self, node: MemoryNode) -> Result<Option<MemoryNode>, TierError>;

    /// At most `top_k` nodes clearing the tier's relevance floor, best first.
    /// Every returned node is touched.
    fn retrieve(
        &mut self,
        query: &RetrievalQuery,
        top_k: usize,
        now: DateTime<Utc>,
    ) -> Vec<ScoredNode>;

    /// Apply the tier's decay curve to every resident and evict those at or
    /// below the eviction threshold. Returns the ids removed; the eviction
    /// count is its length.
    fn decay_tick(&mut self, now: DateTime<Utc>) -> Vec<NodeId>;

    /// Record an access and apply the capped reinforcement boost.
    fn touch(&mut self, id: &NodeId, now: DateTime<Utc>) -> Result<(), TierError>;

    fn get(&self, id: &NodeId) -> Option<&MemoryNode>;

    fn contains(&self, id: &NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Take a node out of the tier (promotion, explicit forget).
    fn remove(&mut self, id: &NodeId) -> Result<MemoryNode, TierError>;

    /// Copies of all residents, ordered by id.
    fn nodes(&self) -> Vec<MemoryNode>;

    /// Copies of at most `limit` residents, most recently accessed first.
    fn most_recent(&self, limit: usize) -> Vec<MemoryNode> {
        let mut all = self.nodes();
        all.sort_by(MemoryNode::recency_cmp);
        all.truncate(limit);
        all
    }

    fn average_weight(&self) -> f64;

    fn status(&self) -> TierStatus {
        TierStatus {
            count: self.len(),
            capacity: self.capacity(),
            avg_weight: self.average_weight(),
        }
    }
}
