//! petgraph::StableGraph wrapper keyed by `NodeId`.

use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::Undirected;
use serde::{Deserialize, Serialize};

use strata_core::memory::NodeId;
use strata_core::models::Association;

/// Weight on an association edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssociationEdge {
    pub association: Association,
    /// How many detections have been folded into `association.strength`.
    pub observations: u64,
}

/// The underlying undirected graph type. Node weights are the memory ids.
pub type AssociationStableGraph = StableGraph<NodeId, AssociationEdge, Undirected>;

/// Wrapper providing indexed access to the association graph.
pub struct IndexedGraph {
    pub graph: AssociationStableGraph,
    /// Map from node id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<NodeId, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self {
            graph: StableGraph::default(),
            node_index: HashMap::new(),
        }
    }

    /// Get or create the graph node for a memory.
    pub fn ensure_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        idx
    }

    pub fn get_node(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Remove a node and all its edges. Returns the number of edges dropped.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<usize> {
        let idx = self.node_index.remove(id)?;
        let edges = self.graph.edges(idx).count();
        self.graph.remove_node(idx);
        Some(edges)
    }

    /// The edge joining `a` and `b`, in either orientation.
    pub fn edge_between(&self, a: &NodeId, b: &NodeId) -> Option<EdgeIndex> {
        let (ia, ib) = (self.get_node(a)?, self.get_node(b)?);
        self.graph.find_edge(ia, ib)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_index.clear();
    }
}

impl Default for IndexedGraph {
    fn default() -> Self {
        Self::new()
    }
}
