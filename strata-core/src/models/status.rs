use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::memory::TierKind;

/// Occupancy of one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierStatus {
    pub count: usize,
    pub capacity: usize,
    pub avg_weight: f64,
}

/// Read-only snapshot of the whole store for operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStatus {
    pub per_tier: BTreeMap<TierKind, TierStatus>,
    pub total_nodes: usize,
    pub association_edges: usize,
}

/// Cumulative counters since engine construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Completed passes, including cancelled and degraded ones.
    pub total_processed: u64,
    /// Mean wall-clock latency of completed passes, in milliseconds.
    pub avg_latency_ms: f64,
    pub decay_evictions_total: u64,
    pub capacity_evictions_total: u64,
    pub cancelled: u64,
    pub degraded_passes: u64,
    pub promotions_total: u64,
    /// Inputs rejected before encoding.
    pub malformed_rejected: u64,
}
