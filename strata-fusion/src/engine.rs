//! [`FusionEngine`]: rank, cut, render, and score a candidate set.

use tracing::debug;

use strata_core::config::FusionConfig;
use strata_core::models::{FusedContext, FusedSection};

use crate::candidate::FusionCandidate;
use crate::confidence;
use crate::ranking::{self, RankedCandidate};
use crate::render;

/// A fused context together with the ranked candidates that made the window.
#[derive(Debug, Clone)]
pub struct FusionOutcome {
    pub context: FusedContext,
    /// Rank order, at most `window` long.
    pub ranked: Vec<RankedCandidate>,
}

/// Stateless apart from its configuration. Same input, same output.
#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuse `candidates`. An empty set yields [`FusedContext::empty`].
    pub fn fuse(&self, candidates: Vec<FusionCandidate>) -> FusionOutcome {
        let considered = candidates.len();
        if considered == 0 {
            return FusionOutcome {
                context: FusedContext::empty(),
                ranked: Vec::new(),
            };
        }

        let mut ranked = ranking::rank(candidates, &self.config.weights);
        ranked.truncate(self.config.window);

        let sections: Vec<FusedSection> = ranked
            .iter()
            .map(|r| FusedSection {
                node_id: r.candidate.id(),
                tier: r.candidate.node.tier,
                score: r.score,
                rendered: render::render(&r.candidate.node.content),
            })
            .collect();

        let scores: Vec<f64> = ranked.iter().map(|r| r.score).collect();
        let confidence =
            confidence::confidence(&scores, self.config.window, self.config.sparse_penalty);

        debug!(
            considered,
            fused = ranked.len(),
            window = self.config.window,
            confidence,
            "context fused"
        );

        FusionOutcome {
            context: FusedContext {
                text: render::join(&sections),
                contributing_node_ids: sections.iter().map(|s| s.node_id).collect(),
                sections,
                confidence,
                candidates_considered: considered,
            },
            ranked,
        }
    }
}
