//! One perception-memory pass: encode, retrieve, expand, fuse, respond.

use std::collections::HashSet;
use std::time::Instant;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use strata_core::errors::{StrataError, StrataResult};
use strata_core::memory::{NodeId, TierKind};
use strata_core::models::{
    ActivatedMemory, DegradationEvent, InputType, LoopState, RawInput,
    ReasoningResult, RetrievalQuery, ScoredNode,
};
use strata_fusion::{FusionCandidate, FusionOutcome};
use strata_observability::tracing_setup::events;
use strata_observability::{fusion_span, process_span, PassLogEntry};

use super::{degradation, Engine};
use crate::cancellation::CancellationToken;
use crate::context::ProcessContext;
use crate::encoder::{self, Encoded};

/// Mutable state of a pass in flight.
struct Pass<'a> {
    now: DateTime<Utc>,
    state: LoopState,
    cancel: &'a CancellationToken,
    degradations: Vec<DegradationEvent>,
}

impl<'a> Pass<'a> {
    fn new(now: DateTime<Utc>, cancel: &'a CancellationToken) -> Self {
        Self {
            now,
            state: LoopState::Idle,
            cancel,
            degradations: Vec::new(),
        }
    }

    /// Enter the next state. False if the pass was cancelled at its entry.
    fn advance(&mut self) -> bool {
        self.state = self.state.next();
        trace!(state = %self.state, "loop state");
        !(self.state.is_cancellation_point() && self.cancel.should_stop(self.state))
    }

    fn degrade(&mut self, component: &str, failure: &dyn std::fmt::Display, fallback: &str) {
        self.degradations
            .push(degradation(component, failure, fallback, self.now));
    }
}

impl Engine {
    /// Run one pass over `input`.
    ///
    /// Only malformed input and configuration problems come back as `Err`.
    /// Tier and graph failures during the pass lower the result's confidence
    /// and are listed in `ReasoningResult::degradations`.
    pub fn process(
        &self,
        input: RawInput,
        input_type: InputType,
        context: &Map<String, Value>,
    ) -> StrataResult<ReasoningResult> {
        self.process_with_cancel(input, input_type, context, &CancellationToken::new())
    }

    /// Like [`process`](Self::process), with the input type given by name.
    pub fn process_str(
        &self,
        input: RawInput,
        input_type: &str,
        context: &Map<String, Value>,
    ) -> StrataResult<ReasoningResult> {
        let input_type = match input_type.parse::<InputType>() {
            Ok(t) => t,
            Err(e) => {
                self.reject(&e);
                return Err(e);
            }
        };
        self.process(input, input_type, context)
    }

    /// Like [`process`](Self::process), checking `cancel` at every state
    /// boundary. A cancelled pass returns `Ok` with `cancelled` set.
    pub fn process_with_cancel(
        &self,
        input: RawInput,
        input_type: InputType,
        context: &Map<String, Value>,
        cancel: &CancellationToken,
    ) -> StrataResult<ReasoningResult> {
        let started = Instant::now();
        let span = process_span!(input_type);
        let _entered = span.enter();

        let encoded = match ProcessContext::parse(context)
            .and_then(|ctx| encoder::encode(&input, input_type, ctx))
        {
            Ok(encoded) => encoded,
            Err(e) => {
                self.reject(&e);
                return Err(e);
            }
        };

        let mut pass = Pass::new(self.clock.now(), cancel);
        let mut result = self.run(&mut pass, encoded);
        result.degradations = pass
            .degradations
            .iter()
            .map(|d| format!("{}: {} ({})", d.component, d.failure, d.fallback_used))
            .collect();

        let entry = PassLogEntry {
            input_type: input_type.as_str().to_string(),
            latency: started.elapsed(),
            activated: result.activated_memories.len(),
            confidence: result.confidence,
            cancelled: result.cancelled,
            degradations: pass.degradations.len(),
            at: pass.now,
        };
        self.observe(|o| {
            for event in pass.degradations {
                o.record_degradation(event);
            }
            o.record_pass(entry);
        });

        debug!(
            activated = result.activated_memories.len(),
            confidence = result.confidence,
            cancelled = result.cancelled,
            degraded = result.is_degraded(),
            "pass complete"
        );
        Ok(result)
    }

    fn reject(&self, error: &StrataError) {
        if let StrataError::MalformedInput { .. } = error {
            self.observe(|o| o.metrics.processing.record_malformed());
        }
        warn!(error = %error, "input rejected");
    }

    fn run(&self, pass: &mut Pass<'_>, encoded: Encoded) -> ReasoningResult {
        if !pass.advance() {
            return cancelled(pass, None);
        }
        if self.config.decay.tick_before_retrieval {
            if let Err(e) = self.decay_if_due(pass.now) {
                pass.degrade("decay", &e, "tick skipped");
            }
        }
        let encoded_node = match encoded.content {
            Some(content) => {
                match self.admit(content, encoded.weight, pass.now, &mut pass.degradations) {
                    Ok(id) => Some(id),
                    Err(e) => {
                        pass.degrade("encoding", &e, "input not stored");
                        None
                    }
                }
            }
            None => None,
        };

        if !pass.advance() {
            return cancelled(pass, encoded_node);
        }
        let mut query = encoded.query;
        if let Some(id) = encoded_node {
            query = query.excluding(id);
        }
        let top_k = encoded
            .top_k
            .unwrap_or(self.config.retrieval.top_k_per_tier);
        let hits = self.retrieve_all(pass, &query, top_k);

        if !pass.advance() {
            return cancelled(pass, encoded_node);
        }
        let candidates = self.expand(pass, hits, encoded_node);

        if !pass.advance() {
            return cancelled(pass, encoded_node);
        }
        let outcome = {
            let span = fusion_span!(candidates.len(), self.config.fusion.window);
            let _entered = span.enter();
            self.fusion.fuse(candidates)
        };

        pass.advance();
        self.touch_expanded(pass, &outcome);
        let result = respond(outcome, encoded_node);
        pass.advance();
        result
    }

    /// Query every tier. Tiers are independent, so with parallel retrieval
    /// on they are queried concurrently and results merged afterwards.
    fn retrieve_all(
        &self,
        pass: &mut Pass<'_>,
        query: &RetrievalQuery,
        top_k: usize,
    ) -> Vec<ScoredNode> {
        if query.is_empty() {
            return Vec::new();
        }
        let now = pass.now;
        let retrieve = |kind: TierKind| -> (TierKind, StrataResult<Vec<ScoredNode>>) {
            let hits = self
                .write_tier(kind)
                .map(|mut tier| tier.retrieve(query, top_k, now));
            (kind, hits)
        };
        let per_tier: Vec<(TierKind, StrataResult<Vec<ScoredNode>>)> =
            if self.config.retrieval.parallel {
                TierKind::ALL[..].par_iter().map(|&k| retrieve(k)).collect()
            } else {
                TierKind::ALL.into_iter().map(retrieve).collect()
            };

        let mut hits = Vec::new();
        for (kind, result) in per_tier {
            match result {
                Ok(found) => {
                    trace!(tier = %kind, hits = found.len(), "tier retrieved");
                    hits.extend(found);
                }
                Err(e) => pass.degrade(kind.as_str(), &e, "tier skipped"),
            }
        }
        hits
    }

    /// Retrieval hits plus their resident neighbors above the expansion
    /// threshold. Nodes already retrieved, and the node encoded by this
    /// pass, are not expanded into.
    fn expand(
        &self,
        pass: &mut Pass<'_>,
        hits: Vec<ScoredNode>,
        encoded_node: Option<NodeId>,
    ) -> Vec<FusionCandidate> {
        let min_strength = self.config.association.expansion_min_strength;
        let mut skip: HashSet<NodeId> = hits.iter().map(|h| h.node.id).collect();
        skip.extend(encoded_node);

        let mut expanded = Vec::new();
        for hit in &hits {
            let neighbors = match self.associations.neighbors_resident(
                &hit.node.id,
                min_strength,
                |id| self.is_resident(id),
            ) {
                Ok(neighbors) => neighbors,
                Err(e) => {
                    pass.degrade("association", &e, "expansion skipped");
                    continue;
                }
            };
            for neighbor in neighbors {
                if skip.contains(&neighbor.id) {
                    continue;
                }
                // Evicted between the residency check and this read.
                let Some(node) = self.get_node(&neighbor.id) else {
                    continue;
                };
                expanded.push(FusionCandidate::expanded(
                    node,
                    hit.node.id,
                    hit.relevance,
                    neighbor.association.strength,
                ));
            }
        }

        hits.into_iter()
            .map(|h| FusionCandidate::retrieved(h.node, h.relevance))
            .chain(expanded)
            .collect()
    }

    /// Register an access on every expanded node that made the window.
    /// Retrieved nodes were already reinforced by their tier.
    fn touch_expanded(&self, pass: &mut Pass<'_>, outcome: &FusionOutcome) {
        for ranked in &outcome.ranked {
            if ranked.candidate.is_retrieved() {
                continue;
            }
            let node = &ranked.candidate.node;
            let touched = self
                .write_tier(node.tier)
                .and_then(|mut tier| tier.touch(&node.id, pass.now).map_err(StrataError::from));
            match touched {
                Ok(()) => {}
                Err(StrataError::TierError(e)) if e.is_not_found() => {
                    debug!(node = %node.id, "expanded node gone before touch");
                }
                Err(e) => pass.degrade(node.tier.as_str(), &e, "access not recorded"),
            }
        }
    }
}

fn cancelled(pass: &mut Pass<'_>, encoded_node: Option<NodeId>) -> ReasoningResult {
    events::pass_cancelled(pass.state.as_str());
    pass.state = LoopState::Idle;
    ReasoningResult::cancelled(encoded_node)
}

fn respond(outcome: FusionOutcome, encoded_node: Option<NodeId>) -> ReasoningResult {
    let activated_memories = outcome
        .ranked
        .iter()
        .map(|r| ActivatedMemory {
            id: r.candidate.id(),
            tier: r.candidate.node.tier,
            score: r.score,
            source: r.candidate.source,
        })
        .collect();
    ReasoningResult {
        confidence: outcome.context.confidence,
        response: outcome.context,
        activated_memories,
        encoded_node,
        degradations: Vec::new(),
        cancelled: false,
    }
}
