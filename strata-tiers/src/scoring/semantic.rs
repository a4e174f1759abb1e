use chrono::{DateTime, Utc};
use strata_core::memory::{MemoryNode, NodeContent};
use strata_core::models::RetrievalQuery;
use strata_core::text;
use strata_core::traits::IRelevanceScorer;

use super::node_tokens;

/// Concept-label match first, statement text second.
#[derive(Debug, Clone)]
pub struct SemanticScorer {
    pub concept_weight: f64,
}

impl Default for SemanticScorer {
    fn default() -> Self {
        Self {
            concept_weight: 0.6,
        }
    }
}

impl IRelevanceScorer for SemanticScorer {
    fn score(&self, node: &MemoryNode, query: &RetrievalQuery, _now: DateTime<Utc>) -> f64 {
        let NodeContent::Semantic(fact) = &node.content else {
            return 0.0;
        };
        // How much of the concept label the query mentions.
        let concept = text::token_set([fact.concept_id.as_str()]);
        let concept_match = text::query_coverage(&concept, &query.tokens);
        let statement = text::query_coverage(&query.tokens, &node_tokens(node));
        (self.concept_weight * concept_match + (1.0 - self.concept_weight) * statement)
            .clamp(0.0, 1.0)
    }
}
