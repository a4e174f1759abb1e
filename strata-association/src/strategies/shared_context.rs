//! Episodes that happened at the same place or involved the same people.

use std::collections::BTreeSet;

use strata_core::memory::{MemoryNode, NodeContent};
use strata_core::models::AssociationType;
use strata_core::text::{jaccard, same_label};
use strata_core::traits::IAssociationComparator;

#[derive(Debug, Clone, Copy, Default)]
pub struct SharedContext;

fn normalized(people: &[String]) -> BTreeSet<String> {
    people
        .iter()
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

impl IAssociationComparator for SharedContext {
    fn name(&self) -> &'static str {
        "shared_context"
    }

    fn kind(&self) -> AssociationType {
        AssociationType::Causal
    }

    fn compare(&self, a: &MemoryNode, b: &MemoryNode) -> f64 {
        let (NodeContent::Episodic(x), NodeContent::Episodic(y)) = (&a.content, &b.content) else {
            return 0.0;
        };

        // Only signals both records carry are compared.
        let mut signals = Vec::with_capacity(2);
        if let (Some(lx), Some(ly)) = (x.location.as_deref(), y.location.as_deref()) {
            signals.push(if same_label(lx, ly) { 1.0 } else { 0.0 });
        }
        let (px, py) = (normalized(&x.participants), normalized(&y.participants));
        if !px.is_empty() && !py.is_empty() {
            signals.push(jaccard(&px, &py));
        }

        if signals.is_empty() {
            0.0
        } else {
            signals.iter().sum::<f64>() / signals.len() as f64
        }
    }
}
