use chrono::{DateTime, Utc};
use strata_core::memory::{MemoryNode, NodeContent};
use strata_core::models::RetrievalQuery;
use strata_core::text;
use strata_core::traits::IRelevanceScorer;

use super::node_tokens;

/// Lexical coverage of the event record, blended with participant and
/// location cues when the query carries any.
#[derive(Debug, Clone)]
pub struct EpisodicScorer {
    /// Weight of the cue match when cues are present.
    pub cue_weight: f64,
}

impl Default for EpisodicScorer {
    fn default() -> Self {
        Self { cue_weight: 0.4 }
    }
}

impl EpisodicScorer {
    fn cue_match(query: &RetrievalQuery, node: &MemoryNode) -> Option<f64> {
        let NodeContent::Episodic(event) = &node.content else {
            return None;
        };
        let mut parts = Vec::new();
        if !query.participants.is_empty() {
            let hits = query
                .participants
                .iter()
                .filter(|p| event.participants.iter().any(|q| text::same_label(p, q)))
                .count();
            parts.push(hits as f64 / query.participants.len() as f64);
        }
        if let Some(loc) = &query.location {
            let hit = event
                .location
                .as_deref()
                .is_some_and(|l| text::same_label(l, loc));
            parts.push(if hit { 1.0 } else { 0.0 });
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.iter().sum::<f64>() / parts.len() as f64)
        }
    }
}

impl IRelevanceScorer for EpisodicScorer {
    fn score(&self, node: &MemoryNode, query: &RetrievalQuery, _now: DateTime<Utc>) -> f64 {
        let lexical = text::query_coverage(&query.tokens, &node_tokens(node));
        let score = match Self::cue_match(query, node) {
            Some(cue) if query.tokens.is_empty() => cue,
            Some(cue) => (1.0 - self.cue_weight) * lexical + self.cue_weight * cue,
            None => lexical,
        };
        score.clamp(0.0, 1.0)
    }
}
