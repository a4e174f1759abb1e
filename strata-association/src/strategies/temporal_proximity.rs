//! Event-like memories created close together in time.

use strata_core::memory::MemoryNode;
use strata_core::models::AssociationType;
use strata_core::traits::IAssociationComparator;

/// Co-occurrence alone is weak evidence; it never outranks a content signal.
pub const MAX_STRENGTH: f64 = 0.6;

#[derive(Debug, Clone, Copy)]
pub struct TemporalProximity {
    window_secs: f64,
}

impl TemporalProximity {
    pub fn new(window_secs: u64) -> Self {
        Self {
            window_secs: window_secs.max(1) as f64,
        }
    }
}

impl IAssociationComparator for TemporalProximity {
    fn name(&self) -> &'static str {
        "temporal_proximity"
    }

    fn kind(&self) -> AssociationType {
        AssociationType::Temporal
    }

    fn compare(&self, a: &MemoryNode, b: &MemoryNode) -> f64 {
        if !(a.tier.is_event_like() && b.tier.is_event_like()) {
            return 0.0;
        }
        let delta = (a.created_at - b.created_at)
            .num_milliseconds()
            .unsigned_abs() as f64
            / 1000.0;
        if delta >= self.window_secs {
            return 0.0;
        }
        MAX_STRENGTH * (-delta / (self.window_secs / 3.0)).exp()
    }
}
