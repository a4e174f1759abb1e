use chrono::{DateTime, Utc};

use crate::memory::{MemoryNode, TierKind};

/// Decides when a node should move to another tier.
pub trait IPromotionPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Destination tier for `node`, or `None` to leave it where it is.
    fn destination(&self, node: &MemoryNode, now: DateTime<Utc>) -> Option<TierKind>;
}
