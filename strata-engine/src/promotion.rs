//! Cross-tier promotion policies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use strata_core::config::PromotionConfig;
use strata_core::memory::{MemoryNode, NodeId, TierKind};
use strata_core::traits::IPromotionPolicy;

/// Moves working-memory items that keep being recalled into the episodic tier.
#[derive(Debug, Clone, Copy)]
pub struct AccessCountPolicy {
    working_access_threshold: u64,
}

impl AccessCountPolicy {
    pub fn new(working_access_threshold: u64) -> Self {
        Self {
            working_access_threshold: working_access_threshold.max(1),
        }
    }

    pub fn from_config(config: &PromotionConfig) -> Self {
        Self::new(config.working_access_threshold)
    }
}

impl IPromotionPolicy for AccessCountPolicy {
    fn name(&self) -> &'static str {
        "access_count"
    }

    fn destination(&self, node: &MemoryNode, _now: DateTime<Utc>) -> Option<TierKind> {
        (node.tier == TierKind::Working && node.access_count >= self.working_access_threshold)
            .then_some(TierKind::Episodic)
    }
}

/// Never moves anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPromotion;

impl IPromotionPolicy for NoPromotion {
    fn name(&self) -> &'static str {
        "none"
    }

    fn destination(&self, _node: &MemoryNode, _now: DateTime<Utc>) -> Option<TierKind> {
        None
    }
}

/// One completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: NodeId,
    pub from: TierKind,
    pub to: TierKind,
}
