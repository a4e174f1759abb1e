use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::NodeContent;
use super::node_id::NodeId;
use super::tier_kind::TierKind;
use super::weight::Weight;
use crate::errors::StrataResult;

/// The atomic unit stored in every tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryNode {
    /// Immutable identity, unique across the whole engine.
    pub id: NodeId,
    /// Owning tier. Always equal to `content.tier()`.
    pub tier: TierKind,
    /// Tier-specific payload.
    pub content: NodeContent,
    pub created_at: DateTime<Utc>,
    /// Updated on every successful retrieval or touch.
    pub last_accessed_at: DateTime<Utc>,
    /// Monotonically increasing.
    pub access_count: u64,
    /// Current salience.
    pub weight: Weight,
    /// Weight at the last reinforcement; the starting point of the decay curve.
    pub anchor_weight: Weight,
    /// Cached association hint. The association graph is authoritative.
    #[serde(default)]
    pub links: BTreeSet<NodeId>,
    /// blake3 hash of the serialized content.
    pub content_hash: String,
}

impl MemoryNode {
    /// Create a node with a fresh id, stamped at `now`.
    pub fn new(content: NodeContent, weight: f64, now: DateTime<Utc>) -> StrataResult<Self> {
        Self::with_id(NodeId::new(), content, weight, now)
    }

    /// Create a node with a caller-chosen id (restores, promotions, tests).
    pub fn with_id(
        id: NodeId,
        content: NodeContent,
        weight: f64,
        now: DateTime<Utc>,
    ) -> StrataResult<Self> {
        let content_hash = Self::compute_content_hash(&content)?;
        let weight = Weight::new(weight);
        Ok(Self {
            id,
            tier: content.tier(),
            content,
            created_at: now,
            last_accessed_at: now,
            access_count: 0,
            weight,
            anchor_weight: weight,
            links: BTreeSet::new(),
            content_hash,
        })
    }

    /// Compute the blake3 content hash from the serialized content.
    ///
    /// Returns an error if the content cannot be serialized (e.g., NaN in f64 fields).
    pub fn compute_content_hash(content: &NodeContent) -> StrataResult<String> {
        let serialized = serde_json::to_string(content)?;
        Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
    }

    /// Re-home this node in another tier, keeping its identity and statistics.
    pub fn rehome(mut self, content: NodeContent) -> StrataResult<Self> {
        self.content_hash = Self::compute_content_hash(&content)?;
        self.tier = content.tier();
        self.content = content;
        Ok(self)
    }

    /// Register an access: bump the counter, move the decay anchor to `now`
    /// and add `boost` to the weight without crossing `ceiling`.
    ///
    /// A weight that already sits above the ceiling is left as is, so a touch
    /// can never lower salience.
    pub fn reinforce(&mut self, now: DateTime<Utc>, boost: f64, ceiling: f64) {
        let current = self.weight.value();
        let boosted = (current + boost.max(0.0)).min(ceiling);
        self.weight = Weight::new(current.max(boosted));
        self.anchor_weight = self.weight;
        self.access_count = self.access_count.saturating_add(1);
        if now > self.last_accessed_at {
            self.last_accessed_at = now;
        }
    }

    /// Working-tier attention, if this is a working node.
    pub fn attention(&self) -> Option<f64> {
        match &self.content {
            NodeContent::Working(c) => Some(c.attention_score),
            _ => None,
        }
    }

    /// Overwrite working-tier attention (clamped to `[0, 1]`) and refresh the
    /// content hash. No-op for other tiers.
    pub fn set_attention(&mut self, value: f64) {
        let NodeContent::Working(c) = &mut self.content else {
            return;
        };
        c.attention_score = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        if let Ok(hash) = Self::compute_content_hash(&self.content) {
            self.content_hash = hash;
        }
    }

    /// Hours elapsed since the decay anchor (never negative).
    pub fn hours_since_access(&self, now: DateTime<Utc>) -> f64 {
        let secs = (now - self.last_accessed_at).num_milliseconds().max(0) as f64 / 1000.0;
        secs / crate::constants::SECONDS_PER_DECAY_UNIT
    }

    /// Most recently accessed first, then by id.
    pub fn recency_cmp(a: &Self, b: &Self) -> std::cmp::Ordering {
        b.last_accessed_at
            .cmp(&a.last_accessed_at)
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Structural comparison, distinct from the id-based `PartialEq`.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.tier == other.tier && self.content_hash == other.content_hash
    }
}

/// Identity equality: two nodes are equal if they have the same id.
impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MemoryNode {}
