use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use strata_core::config::TierConfig;
use strata_core::errors::TierError;
use strata_core::memory::{MemoryNode, NodeId, TierKind, Weight};
use strata_core::models::{RetrievalQuery, ScoredNode};
use strata_core::traits::{IDecayCurve, IMemoryTier, IRelevanceScorer};
use strata_decay::eviction::should_evict;
use strata_decay::{curve_for, formula};

use crate::scoring;

/// Bounded store for one tier.
///
/// Capacity is enforced on every insert: when full, the weakest resident
/// (lowest weight, then least recently accessed, then lowest id) makes room.
pub struct TierStore {
    kind: TierKind,
    config: TierConfig,
    curve: Box<dyn IDecayCurve>,
    scorer: Box<dyn IRelevanceScorer>,
    nodes: HashMap<NodeId, MemoryNode>,
}

impl TierStore {
    /// A store with the tier's default scorer and the configured decay curve.
    pub fn new(kind: TierKind, config: TierConfig) -> Self {
        let curve = curve_for(&config.decay);
        let scorer = scoring::scorer_for(kind, config.capacity);
        Self::with_parts(kind, config, curve, scorer)
    }

    /// A store with a caller-supplied curve and scorer.
    pub fn with_parts(
        kind: TierKind,
        config: TierConfig,
        curve: Box<dyn IDecayCurve>,
        scorer: Box<dyn IRelevanceScorer>,
    ) -> Self {
        let capacity = config.capacity;
        Self {
            kind,
            config,
            curve,
            scorer,
            nodes: HashMap::with_capacity(capacity.min(4_096)),
        }
    }

    pub fn config(&self) -> &TierConfig {
        &self.config
    }

    pub fn curve_name(&self) -> &'static str {
        self.curve.name()
    }

    /// Nodes that would be returned for `query`, scored, without touching them.
    pub fn peek(&self, query: &RetrievalQuery, top_k: usize, now: DateTime<Utc>) -> Vec<ScoredNode> {
        if top_k == 0 {
            return Vec::new();
        }
        let floor = self.config.min_relevance;
        let mut scored: Vec<ScoredNode> = self
            .nodes
            .values()
            .filter(|n| !n.weight.is_zero() && !query.excludes(&n.id))
            .filter_map(|n| {
                let s = self.scorer.score(n, query, now);
                let s = if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) };
                (s > 0.0 && s >= floor).then(|| ScoredNode::new(n.clone(), s))
            })
            .collect();
        scored.sort_by(rank_order);
        scored.truncate(top_k);
        scored
    }

    /// The resident that would be evicted next under capacity pressure.
    pub fn weakest(&self) -> Option<&MemoryNode> {
        self.nodes.values().min_by(|a, b| eviction_order(a, b))
    }

    fn reinforce(&self, node: &mut MemoryNode, now: DateTime<Utc>) {
        node.reinforce(now, self.config.touch_boost, self.config.weight_ceiling);
        if self.kind == TierKind::Working {
            node.set_attention(1.0);
        }
    }
}

/// Score desc, weight desc, last access desc, id asc.
fn rank_order(a: &ScoredNode, b: &ScoredNode) -> Ordering {
    b.relevance
        .total_cmp(&a.relevance)
        .then_with(|| b.node.weight.value().total_cmp(&a.node.weight.value()))
        .then_with(|| b.node.last_accessed_at.cmp(&a.node.last_accessed_at))
        .then_with(|| a.node.id.cmp(&b.node.id))
}

/// Weakest first: weight asc, last access asc, id asc.
fn eviction_order(a: &MemoryNode, b: &MemoryNode) -> Ordering {
    a.weight
        .value()
        .total_cmp(&b.weight.value())
        .then_with(|| a.last_accessed_at.cmp(&b.last_accessed_at))
        .then_with(|| a.id.cmp(&b.id))
}

impl IMemoryTier for TierStore {
    fn kind(&self) -> TierKind {
        self.kind
    }

    fn capacity(&self) -> usize {
        self.config.capacity
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn store(&mut self, node: MemoryNode) -> Result<Option<MemoryNode>, TierError> {
        if node.tier != self.kind || node.content.tier() != self.kind {
            return Err(TierError::ContentMismatch {
                tier: self.kind,
                found: node.content.tier(),
            });
        }

        if let Some(existing) = self.nodes.get_mut(&node.id) {
            *existing = node;
            return Ok(None);
        }

        let mut evicted = None;
        if self.nodes.len() >= self.config.capacity {
            let Some(victim) = self.weakest() else {
                // Zero capacity: nothing can ever be admitted.
                return Err(TierError::Rejected {
                    tier: self.kind,
                    min_weight: f64::INFINITY,
                    incoming_weight: node.weight.value(),
                });
            };
            if self.config.protect_minimum && victim.weight >= node.weight {
                return Err(TierError::Rejected {
                    tier: self.kind,
                    min_weight: victim.weight.value(),
                    incoming_weight: node.weight.value(),
                });
            }
            let victim_id = victim.id;
            evicted = self.nodes.remove(&victim_id);
            debug!(tier = %self.kind, evicted = %victim_id, "capacity eviction");
        }

        self.nodes.insert(node.id, node);
        Ok(evicted)
    }

    fn retrieve(
        &mut self,
        query: &RetrievalQuery,
        top_k: usize,
        now: DateTime<Utc>,
    ) -> Vec<ScoredNode> {
        let mut hits = self.peek(query, top_k, now);
        for hit in &mut hits {
            if let Some(mut node) = self.nodes.remove(&hit.node.id) {
                self.reinforce(&mut node, now);
                hit.node = node.clone();
                self.nodes.insert(node.id, node);
            }
        }
        hits
    }

    fn decay_tick(&mut self, now: DateTime<Utc>) -> Vec<NodeId> {
        let threshold = self.config.eviction_threshold;
        let mut doomed = Vec::new();

        for node in self.nodes.values_mut() {
            let before = node.weight.value();
            let after = formula::compute(self.curve.as_ref(), node, now);
            if let Some(attention) = node.attention() {
                let ratio = if before > 0.0 { after / before } else { 0.0 };
                if ratio < 1.0 {
                    node.set_attention(attention * ratio);
                }
            }
            node.weight = Weight::new(after);
            if should_evict(after, threshold) {
                doomed.push(node.id);
            }
        }

        doomed.sort_unstable();
        for id in &doomed {
            self.nodes.remove(id);
        }
        if !doomed.is_empty() {
            debug!(tier = %self.kind, evicted = doomed.len(), threshold, "decay eviction");
        }
        doomed
    }

    fn touch(&mut self, id: &NodeId, now: DateTime<Utc>) -> Result<(), TierError> {
        let Some(mut node) = self.nodes.remove(id) else {
            return Err(TierError::NotFound {
                tier: self.kind,
                id: *id,
            });
        };
        self.reinforce(&mut node, now);
        self.nodes.insert(node.id, node);
        Ok(())
    }

    fn get(&self, id: &NodeId) -> Option<&MemoryNode> {
        self.nodes.get(id)
    }

    fn remove(&mut self, id: &NodeId) -> Result<MemoryNode, TierError> {
        self.nodes.remove(id).ok_or(TierError::NotFound {
            tier: self.kind,
            id: *id,
        })
    }

    fn nodes(&self) -> Vec<MemoryNode> {
        let mut all: Vec<MemoryNode> = self.nodes.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    fn most_recent(&self, limit: usize) -> Vec<MemoryNode> {
        let mut refs: Vec<&MemoryNode> = self.nodes.values().collect();
        if limit < refs.len() {
            refs.select_nth_unstable_by(limit, |a, b| MemoryNode::recency_cmp(a, b));
            refs.truncate(limit);
        }
        refs.sort_by(|a, b| MemoryNode::recency_cmp(a, b));
        refs.into_iter().cloned().collect()
    }

    fn average_weight(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        self.nodes.values().map(|n| n.weight.value()).sum::<f64>() / self.nodes.len() as f64
    }
}

impl std::fmt::Debug for TierStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TierStore")
            .field("kind", &self.kind)
            .field("len", &self.nodes.len())
            .field("capacity", &self.config.capacity)
            .field("curve", &self.curve.name())
            .finish()
    }
}
