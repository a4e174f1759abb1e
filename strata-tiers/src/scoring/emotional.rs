use chrono::{DateTime, Utc};
use strata_core::memory::{MemoryNode, NodeContent};
use strata_core::models::RetrievalQuery;
use strata_core::text;
use strata_core::traits::IRelevanceScorer;

/// Label match amplified by affective salience.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionalScorer;

impl IRelevanceScorer for EmotionalScorer {
    fn score(&self, node: &MemoryNode, query: &RetrievalQuery, _now: DateTime<Utc>) -> f64 {
        let NodeContent::Emotional(affect) = &node.content else {
            return 0.0;
        };
        let label = text::token_set([affect.label.as_str()]);
        let lexical = text::query_coverage(&query.tokens, &label)
            .max(text::query_coverage(&label, &query.tokens));
        (lexical * (0.5 + 0.5 * affect.salience())).clamp(0.0, 1.0)
    }
}
