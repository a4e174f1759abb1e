//! Direct neighbors (depth = 1).

use petgraph::visit::EdgeRef;
use strata_core::memory::NodeId;

use super::Neighbor;
use crate::graph::IndexedGraph;

/// Neighbors of `id` whose edge strength is at least `min_strength`,
/// strongest first (ties by id). Unknown ids have no neighbors.
pub fn get(graph: &IndexedGraph, id: &NodeId, min_strength: f64) -> Vec<Neighbor> {
    let Some(idx) = graph.get_node(id) else {
        return Vec::new();
    };

    let mut out: Vec<Neighbor> = graph
        .graph
        .edges(idx)
        .filter(|e| e.weight().association.strength >= min_strength)
        .filter_map(|e| {
            let other = if e.source() == idx { e.target() } else { e.source() };
            let other_id = graph.graph.node_weight(other).copied()?;
            Some(Neighbor {
                id: other_id,
                association: e.weight().association,
            })
        })
        .collect();

    out.sort_by(|a, b| {
        b.association
            .strength
            .total_cmp(&a.association.strength)
            .then_with(|| a.id.cmp(&b.id))
    });
    out
}
