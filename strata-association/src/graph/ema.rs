//! Idempotent edge insertion with exponential-moving-average strength.

use strata_core::memory::NodeId;
use strata_core::models::{Association, EdgeUpdate};

use super::stable_graph::{AssociationEdge, IndexedGraph};

/// `previous + α · (observed − previous)`, clamped to `[0, 1]`.
pub fn blend(previous: f64, observed: f64, alpha: f64) -> f64 {
    (previous + alpha * (observed - previous)).clamp(0.0, 1.0)
}

/// Insert the edge `a - b`, or fold `observed` into the existing one.
///
/// The edge type is last-writer-wins; strength is smoothed. Self-loops are
/// ignored.
pub fn upsert(
    graph: &mut IndexedGraph,
    a: NodeId,
    b: NodeId,
    observed: Association,
    alpha: f64,
) -> EdgeUpdate {
    if a == b {
        return EdgeUpdate::Ignored;
    }

    if let Some(edge) = graph.edge_between(&a, &b) {
        if let Some(weight) = graph.graph.edge_weight_mut(edge) {
            let previous = weight.association;
            let current = Association::new(
                observed.kind,
                blend(previous.strength, observed.strength, alpha),
            );
            weight.association = current;
            weight.observations = weight.observations.saturating_add(1);
            return EdgeUpdate::Updated { previous, current };
        }
    }

    let ia = graph.ensure_node(a);
    let ib = graph.ensure_node(b);
    graph.graph.add_edge(
        ia,
        ib,
        AssociationEdge {
            association: observed,
            observations: 1,
        },
    );
    EdgeUpdate::Inserted(observed)
}
