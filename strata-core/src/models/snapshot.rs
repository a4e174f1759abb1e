use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::association::Association;
use crate::memory::{MemoryNode, NodeId};

/// One undirected association edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub a: NodeId,
    pub b: NodeId,
    pub association: Association,
}

/// Complete, serializable image of an engine's memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Crate version that produced the snapshot.
    pub version: String,
    pub taken_at: DateTime<Utc>,
    pub nodes: Vec<MemoryNode>,
    pub edges: Vec<EdgeRecord>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
