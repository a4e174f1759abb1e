//! Tier-specific relevance scoring.
//!
//! Each scorer maps `(node, query)` to `[0, 1]`. Lexical signals come from
//! `strata_core::text`; nothing here is randomised.

pub mod emotional;
pub mod episodic;
pub mod procedural;
pub mod semantic;
pub mod working;

pub use emotional::EmotionalScorer;
pub use episodic::EpisodicScorer;
pub use procedural::ProceduralScorer;
pub use semantic::SemanticScorer;
pub use working::WorkingScorer;

use std::collections::BTreeSet;

use strata_core::memory::MemoryNode;
use strata_core::text;
use strata_core::traits::IRelevanceScorer;
use strata_core::TierKind;

/// The default scorer for a tier holding at most `capacity` nodes.
pub fn scorer_for(kind: TierKind, capacity: usize) -> Box<dyn IRelevanceScorer> {
    match kind {
        TierKind::Working => Box::new(WorkingScorer::default()),
        TierKind::Episodic => Box::new(EpisodicScorer::default()),
        TierKind::Semantic => Box::new(SemanticScorer::default()),
        TierKind::Procedural => Box::new(ProceduralScorer::new(capacity as u64)),
        TierKind::Emotional => Box::new(EmotionalScorer),
    }
}

pub(crate) fn node_tokens(node: &MemoryNode) -> BTreeSet<String> {
    text::token_set(node.content.text_fragments())
}
