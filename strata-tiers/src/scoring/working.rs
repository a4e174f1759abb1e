use chrono::{DateTime, Utc};
use strata_core::memory::MemoryNode;
use strata_core::models::RetrievalQuery;
use strata_core::text;
use strata_core::traits::IRelevanceScorer;

use super::node_tokens;

/// Lexical match scaled by attention and recency.
///
/// `score = coverage × (floor + (1 − floor) × attention × e^(−hours / horizon))`
#[derive(Debug, Clone)]
pub struct WorkingScorer {
    /// Share of the score that survives zero attention.
    pub floor: f64,
    /// Recency horizon in hours.
    pub horizon_hours: f64,
}

impl Default for WorkingScorer {
    fn default() -> Self {
        Self {
            floor: 0.5,
            horizon_hours: 1.0,
        }
    }
}

impl IRelevanceScorer for WorkingScorer {
    fn score(&self, node: &MemoryNode, query: &RetrievalQuery, now: DateTime<Utc>) -> f64 {
        let coverage = text::query_coverage(&query.tokens, &node_tokens(node));
        if coverage == 0.0 {
            return 0.0;
        }
        let attention = node.attention().unwrap_or(1.0);
        let recency = (-node.hours_since_access(now) / self.horizon_hours.max(f64::EPSILON)).exp();
        let focus = self.floor + (1.0 - self.floor) * attention * recency;
        (coverage * focus).clamp(0.0, 1.0)
    }
}
