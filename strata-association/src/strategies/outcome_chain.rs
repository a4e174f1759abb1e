//! One episode's results feeding another episode's actions.

use strata_core::memory::{MemoryNode, NodeContent};
use strata_core::models::AssociationType;
use strata_core::text::{query_coverage, token_set};
use strata_core::traits::IAssociationComparator;

#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeChain;

fn chain(results: &[String], actions: &[String]) -> f64 {
    let r = token_set(results.iter().map(String::as_str));
    let a = token_set(actions.iter().map(String::as_str));
    query_coverage(&a, &r)
}

impl IAssociationComparator for OutcomeChain {
    fn name(&self) -> &'static str {
        "outcome_chain"
    }

    fn kind(&self) -> AssociationType {
        AssociationType::Causal
    }

    fn compare(&self, a: &MemoryNode, b: &MemoryNode) -> f64 {
        let (NodeContent::Episodic(x), NodeContent::Episodic(y)) = (&a.content, &b.content) else {
            return 0.0;
        };
        chain(&x.results, &y.actions).max(chain(&y.results, &x.actions))
    }
}
