//! Remove edges to memories that are gone, weak edges, and orphaned nodes.

use petgraph::stable_graph::EdgeIndex;
use strata_core::memory::NodeId;

use super::stable_graph::IndexedGraph;

/// Result of a pruning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneResult {
    /// Number of edges removed.
    pub edges_removed: usize,
    /// Number of graph nodes removed.
    pub nodes_removed: usize,
}

impl PruneResult {
    pub fn is_empty(&self) -> bool {
        self.edges_removed == 0 && self.nodes_removed == 0
    }
}

/// Drop every graph node whose memory is no longer resident in any tier,
/// together with its edges.
pub fn prune_non_resident<F>(graph: &mut IndexedGraph, is_resident: F) -> PruneResult
where
    F: Fn(&NodeId) -> bool,
{
    let gone: Vec<NodeId> = graph
        .node_index
        .keys()
        .filter(|id| !is_resident(id))
        .copied()
        .collect();

    let mut result = PruneResult::default();
    for id in &gone {
        if let Some(edges) = graph.remove_node(id) {
            result.edges_removed += edges;
            result.nodes_removed += 1;
        }
    }
    result.nodes_removed += remove_orphaned_nodes(graph);
    result
}

/// Prune all edges with strength below the threshold.
pub fn prune_weak_edges(graph: &mut IndexedGraph, min_strength: f64) -> PruneResult {
    let weak: Vec<EdgeIndex> = graph
        .graph
        .edge_indices()
        .filter(|&idx| {
            graph
                .graph
                .edge_weight(idx)
                .is_some_and(|w| w.association.strength < min_strength)
        })
        .collect();

    let edges_removed = weak.len();
    for idx in weak {
        graph.graph.remove_edge(idx);
    }

    PruneResult {
        edges_removed,
        nodes_removed: remove_orphaned_nodes(graph),
    }
}

/// Remove nodes with no edges.
fn remove_orphaned_nodes(graph: &mut IndexedGraph) -> usize {
    let orphans: Vec<NodeId> = graph
        .graph
        .node_indices()
        .filter(|&idx| graph.graph.neighbors(idx).next().is_none())
        .filter_map(|idx| graph.graph.node_weight(idx).copied())
        .collect();

    let count = orphans.len();
    for id in &orphans {
        graph.remove_node(id);
    }
    count
}
