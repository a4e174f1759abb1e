//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a node being written to a tier.
pub fn node_stored(node_id: &str, tier: &str, weight: f64) {
    tracing::info!(
        event = "node_stored",
        node_id = %node_id,
        tier = %tier,
        weight = weight,
        "node stored"
    );
}

/// Log a node leaving the store, by decay or capacity pressure.
pub fn node_evicted(node_id: &str, tier: &str, reason: &str) {
    tracing::info!(
        event = "node_evicted",
        node_id = %node_id,
        tier = %tier,
        reason = %reason,
        "node evicted"
    );
}

/// Log the end of a decay pass.
pub fn decay_tick_completed(total_evicted: usize, edges_pruned: usize) {
    tracing::info!(
        event = "decay_tick_completed",
        total_evicted = total_evicted,
        edges_pruned = edges_pruned,
        "decay tick completed"
    );
}

/// Log a new association edge.
pub fn association_formed(a: &str, b: &str, kind: &str, strength: f64) {
    tracing::debug!(
        event = "association_formed",
        a = %a,
        b = %b,
        kind = %kind,
        strength = strength,
        "association formed"
    );
}

/// Log a cross-tier move.
pub fn node_promoted(node_id: &str, from: &str, to: &str) {
    tracing::info!(
        event = "node_promoted",
        node_id = %node_id,
        from = %from,
        to = %to,
        "node promoted"
    );
}

/// Log a pass that completed with swallowed failures.
pub fn pass_degraded(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "pass_degraded",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "processing pass degraded"
    );
}

/// Log a pass stopped at a state boundary.
pub fn pass_cancelled(state: &str) {
    tracing::info!(
        event = "pass_cancelled",
        state = %state,
        "processing pass cancelled"
    );
}
