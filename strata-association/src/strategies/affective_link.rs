//! Affect attached to an outcome, and affects that feel alike.

use strata_core::memory::{EmotionalContent, MemoryNode, NodeContent};
use strata_core::models::AssociationType;
use strata_core::text::same_label;
use strata_core::traits::IAssociationComparator;

/// An emotion explicitly produced by the other node.
const OUTCOME_LINK: f64 = 1.0;
/// Share of the score carried by an identical label.
const LABEL_SHARE: f64 = 0.6;

#[derive(Debug, Clone, Copy, Default)]
pub struct AffectiveLink;

fn produced_by(emotion: &NodeContent, other: &MemoryNode) -> bool {
    matches!(emotion, NodeContent::Emotional(e) if e.associated_outcome == Some(other.id))
}

fn affect_similarity(x: &EmotionalContent, y: &EmotionalContent) -> f64 {
    let label = if same_label(&x.label, &y.label) { 1.0 } else { 0.0 };
    let valence = 1.0 - ((x.valence.clamp(-1.0, 1.0) - y.valence.clamp(-1.0, 1.0)).abs() / 2.0);
    let arousal = 1.0 - (x.arousal.clamp(0.0, 1.0) - y.arousal.clamp(0.0, 1.0)).abs();
    LABEL_SHARE * label + (1.0 - LABEL_SHARE) * valence * arousal
}

impl IAssociationComparator for AffectiveLink {
    fn name(&self) -> &'static str {
        "affective_link"
    }

    fn kind(&self) -> AssociationType {
        AssociationType::Affective
    }

    fn compare(&self, a: &MemoryNode, b: &MemoryNode) -> f64 {
        if produced_by(&a.content, b) || produced_by(&b.content, a) {
            return OUTCOME_LINK;
        }
        match (&a.content, &b.content) {
            (NodeContent::Emotional(x), NodeContent::Emotional(y)) => affect_similarity(x, y),
            _ => 0.0,
        }
    }
}
