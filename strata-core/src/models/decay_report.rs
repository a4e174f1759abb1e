use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::{NodeId, TierKind};

/// Outcome of one decay pass across all tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayReport {
    pub at: DateTime<Utc>,
    pub evicted_per_tier: BTreeMap<TierKind, usize>,
    pub evicted_ids: Vec<NodeId>,
    pub total_evicted: usize,
}

impl DecayReport {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            at,
            evicted_per_tier: BTreeMap::new(),
            evicted_ids: Vec::new(),
            total_evicted: 0,
        }
    }

    pub fn record(&mut self, tier: TierKind, evicted: Vec<NodeId>) {
        self.total_evicted += evicted.len();
        *self.evicted_per_tier.entry(tier).or_insert(0) += evicted.len();
        self.evicted_ids.extend(evicted);
    }

    pub fn evicted_in(&self, tier: TierKind) -> usize {
        self.evicted_per_tier.get(&tier).copied().unwrap_or(0)
    }
}
