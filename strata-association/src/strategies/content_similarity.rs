//! Lexical overlap of the two payloads. Identical content scores 1.

use strata_core::memory::MemoryNode;
use strata_core::models::AssociationType;
use strata_core::text;
use strata_core::traits::IAssociationComparator;

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSimilarity;

impl IAssociationComparator for ContentSimilarity {
    fn name(&self) -> &'static str {
        "content_similarity"
    }

    fn kind(&self) -> AssociationType {
        AssociationType::Semantic
    }

    fn compare(&self, a: &MemoryNode, b: &MemoryNode) -> f64 {
        if a.content_eq(b) {
            return 1.0;
        }
        let ta = text::token_set(a.content.text_fragments());
        let tb = text::token_set(b.content.text_fragments());
        text::soft_similarity(&ta, &tb)
    }
}
