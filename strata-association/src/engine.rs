//! The association graph as the rest of the engine sees it.

use tracing::debug;

use strata_core::config::AssociationConfig;
use strata_core::errors::{GraphError, StrataResult};
use strata_core::memory::{MemoryNode, NodeId};
use strata_core::models::{Association, EdgeRecord, EdgeUpdate};

use crate::detector::AssociationDetector;
use crate::graph::{ema, pruning, GraphManager, PruneResult};
use crate::traversal::{self, Neighbor};

/// Detection, storage and expansion over one shared graph.
#[derive(Debug)]
pub struct AssociationEngine {
    graph: GraphManager,
    detector: AssociationDetector,
    ema_alpha: f64,
    max_link_candidates: usize,
}

impl AssociationEngine {
    pub fn new(detector: AssociationDetector, ema_alpha: f64, max_link_candidates: usize) -> Self {
        Self {
            graph: GraphManager::new(),
            detector,
            ema_alpha,
            max_link_candidates,
        }
    }

    pub fn from_config(config: &AssociationConfig) -> Self {
        Self::new(
            AssociationDetector::from_config(config),
            config.ema_alpha,
            config.max_link_candidates,
        )
    }

    pub fn detector(&self) -> &AssociationDetector {
        &self.detector
    }

    pub fn graph(&self) -> &GraphManager {
        &self.graph
    }

    pub fn detect(&self, a: &MemoryNode, b: &MemoryNode) -> Option<Association> {
        self.detector.detect(a, b)
    }

    /// Insert the edge `a - b` or fold the observation into the existing one.
    pub fn add_edge(
        &self,
        a: NodeId,
        b: NodeId,
        association: Association,
    ) -> StrataResult<EdgeUpdate> {
        let strength = association.strength;
        if !(0.0..=1.0).contains(&strength) {
            return Err(GraphError::StrengthOutOfRange { strength }.into());
        }
        let mut graph = self.graph.write()?;
        Ok(ema::upsert(&mut graph, a, b, association, self.ema_alpha))
    }

    /// Compare `node` against the most recently accessed `candidates` and
    /// record every detected association. Returns the edges written.
    pub fn link_new_node(
        &self,
        node: &MemoryNode,
        candidates: &[MemoryNode],
    ) -> StrataResult<Vec<(NodeId, EdgeUpdate)>> {
        let mut pool: Vec<&MemoryNode> = candidates.iter().filter(|c| c.id != node.id).collect();
        pool.sort_by(|a, b| MemoryNode::recency_cmp(a, b));
        pool.truncate(self.max_link_candidates);

        let detected: Vec<(NodeId, Association)> = pool
            .into_iter()
            .filter_map(|other| self.detector.detect(node, other).map(|a| (other.id, a)))
            .collect();
        if detected.is_empty() {
            return Ok(Vec::new());
        }

        let mut graph = self.graph.write()?;
        let mut written = Vec::with_capacity(detected.len());
        for (other, association) in detected {
            let update = ema::upsert(&mut graph, node.id, other, association, self.ema_alpha);
            debug!(
                node = %node.id,
                other = %other,
                kind = %association.kind,
                strength = association.strength,
                "association recorded"
            );
            written.push((other, update));
        }
        Ok(written)
    }

    /// Direct neighbors of `id` with strength at least `min_strength`.
    pub fn neighbors(&self, id: &NodeId, min_strength: f64) -> StrataResult<Vec<Neighbor>> {
        let graph = self.graph.read()?;
        Ok(traversal::neighbors(&graph, id, min_strength))
    }

    /// Like [`neighbors`](Self::neighbors), dropping targets that are no
    /// longer resident anywhere.
    pub fn neighbors_resident<F>(
        &self,
        id: &NodeId,
        min_strength: f64,
        is_resident: F,
    ) -> StrataResult<Vec<Neighbor>>
    where
        F: Fn(&NodeId) -> bool,
    {
        let mut out = self.neighbors(id, min_strength)?;
        out.retain(|n| is_resident(&n.id));
        Ok(out)
    }

    /// Remove graph nodes whose memory is gone, with their edges.
    pub fn prune<F>(&self, is_resident: F) -> StrataResult<PruneResult>
    where
        F: Fn(&NodeId) -> bool,
    {
        let mut graph = self.graph.write()?;
        let result = pruning::prune_non_resident(&mut graph, is_resident);
        if !result.is_empty() {
            debug!(
                edges_removed = result.edges_removed,
                nodes_removed = result.nodes_removed,
                "association graph pruned"
            );
        }
        Ok(result)
    }

    pub fn prune_weak(&self, min_strength: f64) -> StrataResult<PruneResult> {
        let mut graph = self.graph.write()?;
        Ok(pruning::prune_weak_edges(&mut graph, min_strength))
    }

    /// Drop one node and its edges. Returns the number of edges removed.
    pub fn remove_node(&self, id: &NodeId) -> StrataResult<usize> {
        let mut graph = self.graph.write()?;
        Ok(graph.remove_node(id).unwrap_or(0))
    }

    pub fn node_count(&self) -> StrataResult<usize> {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> StrataResult<usize> {
        self.graph.edge_count()
    }

    /// Every edge, endpoints ordered so `a < b`, sorted by `(a, b)`.
    pub fn edges(&self) -> StrataResult<Vec<EdgeRecord>> {
        let graph = self.graph.read()?;
        let mut out: Vec<EdgeRecord> = graph
            .graph
            .edge_indices()
            .filter_map(|idx| {
                let (ia, ib) = graph.graph.edge_endpoints(idx)?;
                let a = *graph.graph.node_weight(ia)?;
                let b = *graph.graph.node_weight(ib)?;
                let association = graph.graph.edge_weight(idx)?.association;
                let (a, b) = if a <= b { (a, b) } else { (b, a) };
                Some(EdgeRecord { a, b, association })
            })
            .collect();
        out.sort_by(|x, y| x.a.cmp(&y.a).then_with(|| x.b.cmp(&y.b)));
        Ok(out)
    }

    /// Replace the graph with `edges`, written verbatim (no smoothing).
    pub fn restore_edges(&self, edges: &[EdgeRecord]) -> StrataResult<usize> {
        let mut graph = self.graph.write()?;
        graph.clear();
        let mut restored = 0;
        for edge in edges {
            let strength = edge.association.strength;
            if !(0.0..=1.0).contains(&strength) {
                return Err(GraphError::StrengthOutOfRange { strength }.into());
            }
            let update = ema::upsert(&mut graph, edge.a, edge.b, edge.association, 1.0);
            if let EdgeUpdate::Inserted(_) = update {
                restored += 1;
            }
        }
        Ok(restored)
    }
}
