//! One-hop expansion over the association graph.

pub mod neighbors;

use serde::{Deserialize, Serialize};
use strata_core::memory::NodeId;
use strata_core::models::Association;

pub use neighbors::get as neighbors;

/// A directly linked node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: NodeId,
    pub association: Association,
}
