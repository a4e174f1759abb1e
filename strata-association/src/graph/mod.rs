//! Association graph storage: the indexed petgraph wrapper, EMA upserts,
//! pruning, and a thread-safe manager.

pub mod ema;
pub mod pruning;
pub mod stable_graph;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use strata_core::errors::{StrataError, StrataResult};

pub use pruning::PruneResult;
pub use stable_graph::{AssociationEdge, IndexedGraph};

/// Shared, lock-protected association graph.
///
/// Reads (neighbor expansion) vastly outnumber writes (linking on insert,
/// pruning after decay), so a `RwLock` is enough.
#[derive(Clone, Default)]
pub struct GraphManager {
    graph: Arc<RwLock<IndexedGraph>>,
}

impl GraphManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared handle, for callers that need to hold the lock across calls.
    pub fn shared(&self) -> Arc<RwLock<IndexedGraph>> {
        Arc::clone(&self.graph)
    }

    pub fn read(&self) -> StrataResult<RwLockReadGuard<'_, IndexedGraph>> {
        self.graph
            .read()
            .map_err(|e| StrataError::ConcurrencyError(e.to_string()))
    }

    pub fn write(&self) -> StrataResult<RwLockWriteGuard<'_, IndexedGraph>> {
        self.graph
            .write()
            .map_err(|e| StrataError::ConcurrencyError(e.to_string()))
    }

    pub fn node_count(&self) -> StrataResult<usize> {
        Ok(self.read()?.node_count())
    }

    pub fn edge_count(&self) -> StrataResult<usize> {
        Ok(self.read()?.edge_count())
    }
}

impl std::fmt::Debug for GraphManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("GraphManager");
        if let Ok(g) = self.read() {
            s.field("nodes", &g.node_count()).field("edges", &g.edge_count());
        }
        s.finish()
    }
}
