//! Semantic pairs that name the same concept, or point at each other through
//! a relation. An event whose location is a known concept is also linked to it.

use strata_core::memory::{MemoryNode, NodeContent};
use strata_core::models::AssociationType;
use strata_core::text::same_label;
use strata_core::traits::IAssociationComparator;

const SAME_CONCEPT: f64 = 1.0;
const RELATED_CONCEPT: f64 = 0.8;
const EVENT_AT_CONCEPT: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default)]
pub struct SharedConcept;

fn one_way(a: &NodeContent, b: &NodeContent) -> f64 {
    match (a, b) {
        (NodeContent::Semantic(x), NodeContent::Semantic(y)) => {
            if same_label(&x.concept_id, &y.concept_id) {
                SAME_CONCEPT
            } else if x
                .relations
                .iter()
                .any(|r| same_label(&r.target_concept, &y.concept_id))
            {
                RELATED_CONCEPT
            } else {
                0.0
            }
        }
        (NodeContent::Semantic(x), NodeContent::Episodic(e)) => e
            .location
            .as_deref()
            .filter(|loc| same_label(loc, &x.concept_id))
            .map_or(0.0, |_| EVENT_AT_CONCEPT),
        _ => 0.0,
    }
}

impl IAssociationComparator for SharedConcept {
    fn name(&self) -> &'static str {
        "shared_concept"
    }

    fn kind(&self) -> AssociationType {
        AssociationType::Semantic
    }

    fn compare(&self, a: &MemoryNode, b: &MemoryNode) -> f64 {
        one_way(&a.content, &b.content).max(one_way(&b.content, &a.content))
    }
}
