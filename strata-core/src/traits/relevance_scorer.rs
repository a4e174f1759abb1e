use chrono::{DateTime, Utc};

use crate::memory::MemoryNode;
use crate::models::RetrievalQuery;

/// Tier-specific relevance of a resident node to a query.
pub trait IRelevanceScorer: Send + Sync {
    /// A score in `[0, 1]`.
    fn score(&self, node: &MemoryNode, query: &RetrievalQuery, now: DateTime<Utc>) -> f64;
}
