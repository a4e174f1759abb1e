//! Store churn: evictions per cause and tier, promotions, association growth.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strata_core::memory::TierKind;
use strata_core::models::DecayReport;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryMetrics {
    pub decay_ticks: u64,
    pub decay_evictions_total: u64,
    pub capacity_evictions_total: u64,
    /// Evictions of either cause, keyed by tier name.
    pub evictions_by_tier: BTreeMap<String, u64>,
    pub promotions_total: u64,
    pub associations_formed: u64,
    pub edges_pruned: u64,
}

impl MemoryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decay pass into the counters.
    pub fn record_decay(&mut self, report: &DecayReport, edges_pruned: usize) {
        self.decay_ticks += 1;
        self.decay_evictions_total += report.total_evicted as u64;
        self.edges_pruned += edges_pruned as u64;
        for (tier, evicted) in &report.evicted_per_tier {
            if *evicted > 0 {
                *self.evictions_by_tier.entry(tier.to_string()).or_default() += *evicted as u64;
            }
        }
    }

    pub fn record_capacity_eviction(&mut self, tier: TierKind) {
        self.capacity_evictions_total += 1;
        *self.evictions_by_tier.entry(tier.to_string()).or_default() += 1;
    }

    pub fn record_promotion(&mut self) {
        self.promotions_total += 1;
    }

    pub fn record_associations(&mut self, inserted: usize) {
        self.associations_formed += inserted as u64;
    }

    pub fn evictions_in(&self, tier: TierKind) -> u64 {
        self.evictions_by_tier
            .get(tier.as_str())
            .copied()
            .unwrap_or(0)
    }
}
