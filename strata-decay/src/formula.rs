use chrono::{DateTime, Utc};
use strata_core::memory::MemoryNode;
use strata_core::traits::IDecayCurve;

/// Every input and output of one decay evaluation, for debugging and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayBreakdown {
    pub curve: &'static str,
    pub anchor_weight: f64,
    pub elapsed_hours: f64,
    pub access_count: u64,
    /// Raw curve output from the anchor.
    pub curve_weight: f64,
    pub previous_weight: f64,
    /// `min(previous_weight, curve_weight)`.
    pub final_weight: f64,
}

/// Post-decay weight of `node` at `now`.
///
/// The curve always restarts from the anchor set at the last reinforcement,
/// and the result is capped by the current weight so repeated ticks (or a
/// clock that steps backwards) can never raise it.
pub fn compute(curve: &dyn IDecayCurve, node: &MemoryNode, now: DateTime<Utc>) -> f64 {
    compute_breakdown(curve, node, now).final_weight
}

/// Same as [`compute`] but keeps every intermediate value.
pub fn compute_breakdown(
    curve: &dyn IDecayCurve,
    node: &MemoryNode,
    now: DateTime<Utc>,
) -> DecayBreakdown {
    let anchor = node.anchor_weight.value();
    let elapsed = node.hours_since_access(now);
    let curve_weight = curve.decayed_weight(anchor, elapsed, node.access_count);
    let previous = node.weight.value();
    let final_weight = previous.min(curve_weight).max(0.0);

    DecayBreakdown {
        curve: curve.name(),
        anchor_weight: anchor,
        elapsed_hours: elapsed,
        access_count: node.access_count,
        curve_weight,
        previous_weight: previous,
        final_weight,
    }
}
