//! Snapshot and restore.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use strata_core::constants::VERSION;
use strata_core::errors::{StrataError, StrataResult, TierError};
use strata_core::memory::{MemoryNode, NodeId, TierKind};
use strata_core::models::EngineSnapshot;
use strata_core::traits::ISnapshotStore;

use super::{Engine, TierWrite};

impl Engine {
    /// Every resident node and association edge.
    pub fn snapshot(&self) -> StrataResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            version: VERSION.to_string(),
            taken_at: self.clock.now(),
            nodes: self.nodes()?,
            edges: self.associations.edges()?,
        })
    }

    pub fn save_snapshot(&self, store: &dyn ISnapshotStore) -> StrataResult<()> {
        let snapshot = self.snapshot()?;
        store.save(&snapshot)?;
        info!(
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "snapshot saved"
        );
        Ok(())
    }

    /// Replace all memory with `snapshot`.
    ///
    /// The snapshot is validated before anything is cleared. Nodes are stored
    /// through their tiers under the usual capacity rules: an oversized tier
    /// is cut down by eviction, and nodes a protect-minimum tier refuses are
    /// dropped. Edges to nodes that did not survive are pruned. Any other
    /// tier failure puts the previous contents back and leaves the graph
    /// untouched.
    pub fn restore(&self, snapshot: &EngineSnapshot) -> StrataResult<()> {
        validate(snapshot)?;

        let mut tiers = Vec::with_capacity(TierKind::COUNT);
        for kind in TierKind::ALL {
            tiers.push(self.write_tier(kind)?);
        }
        let previous: Vec<Vec<MemoryNode>> = tiers.iter().map(|tier| tier.nodes()).collect();
        if let Err(e) = clear(&mut tiers) {
            rollback(&mut tiers, previous);
            return Err(e);
        }

        let mut dropped = 0usize;
        for node in &snapshot.nodes {
            match tiers[node.tier.index()].store(node.clone()) {
                Ok(_) => {}
                Err(TierError::Rejected { .. }) => {
                    debug!(node = %node.id, tier = %node.tier, "snapshot node refused by tier");
                    dropped += 1;
                }
                Err(e) => {
                    rollback(&mut tiers, previous);
                    return Err(e.into());
                }
            }
        }
        drop(tiers);

        let restored = self.associations.restore_edges(&snapshot.edges)?;
        let pruned = self.associations.prune(|id| self.is_resident(id))?;

        info!(
            version = %snapshot.version,
            nodes = snapshot.nodes.len(),
            dropped,
            edges = restored,
            edges_pruned = pruned.edges_removed,
            "snapshot restored"
        );
        Ok(())
    }

    /// Restore from the store's latest snapshot. `false` if it had none.
    pub fn restore_from(&self, store: &dyn ISnapshotStore) -> StrataResult<bool> {
        match store.load()? {
            Some(snapshot) => {
                self.restore(&snapshot)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn validate(snapshot: &EngineSnapshot) -> StrataResult<()> {
    let mut seen = HashSet::with_capacity(snapshot.nodes.len());
    for node in &snapshot.nodes {
        if node.tier != node.content.tier() {
            return Err(snapshot_error(format!(
                "node {} is filed under {} but holds {} content",
                node.id,
                node.tier,
                node.content.tier()
            )));
        }
        if !seen.insert(node.id) {
            return Err(snapshot_error(format!("duplicate node {}", node.id)));
        }
    }
    for edge in &snapshot.edges {
        if !(seen.contains(&edge.a) && seen.contains(&edge.b)) {
            return Err(snapshot_error(format!(
                "edge {} - {} references an unknown node",
                edge.a, edge.b
            )));
        }
        let strength = edge.association.strength;
        if !(0.0..=1.0).contains(&strength) {
            return Err(snapshot_error(format!(
                "edge {} - {} has strength {strength} outside [0, 1]",
                edge.a, edge.b
            )));
        }
    }
    Ok(())
}

fn snapshot_error(reason: String) -> StrataError {
    StrataError::SnapshotError { reason }
}

fn clear(tiers: &mut [TierWrite<'_>]) -> StrataResult<()> {
    for tier in tiers.iter_mut() {
        for node in tier.nodes() {
            tier.remove(&node.id)?;
        }
    }
    Ok(())
}

/// Put back what the tiers held before a failed restore. Every set fitted
/// its tier before, so re-storing it cannot evict.
fn rollback(tiers: &mut [TierWrite<'_>], previous: Vec<Vec<MemoryNode>>) {
    for (tier, nodes) in tiers.iter_mut().zip(previous) {
        let stale: Vec<NodeId> = tier.nodes().iter().map(|n| n.id).collect();
        for id in stale {
            let _ = tier.remove(&id);
        }
        for node in nodes {
            if let Err(e) = tier.store(node) {
                warn!(tier = %tier.kind(), error = %e, "restore rollback lost a node");
            }
        }
    }
}
