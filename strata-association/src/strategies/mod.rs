//! Comparator registry. Every comparator is symmetric and returns a strength
//! in `[0, 1]` for the association type it stands for.

pub mod affective_link;
pub mod content_similarity;
pub mod outcome_chain;
pub mod shared_concept;
pub mod shared_context;
pub mod temporal_proximity;

pub use affective_link::AffectiveLink;
pub use content_similarity::ContentSimilarity;
pub use outcome_chain::OutcomeChain;
pub use shared_concept::SharedConcept;
pub use shared_context::SharedContext;
pub use temporal_proximity::TemporalProximity;

use strata_core::config::AssociationConfig;
use strata_core::traits::IAssociationComparator;

/// The built-in comparators, configured.
pub fn default_comparators(config: &AssociationConfig) -> Vec<Box<dyn IAssociationComparator>> {
    vec![
        Box::new(ContentSimilarity),
        Box::new(SharedConcept),
        Box::new(TemporalProximity::new(config.temporal_window_secs)),
        Box::new(SharedContext),
        Box::new(OutcomeChain),
        Box::new(AffectiveLink),
    ]
}
