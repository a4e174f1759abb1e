use serde::{Deserialize, Serialize};

use super::defaults;

/// Association graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociationConfig {
    /// Detected strengths below this are discarded.
    pub threshold: f64,
    /// Weight of a new observation when re-detecting an existing edge.
    pub ema_alpha: f64,
    /// Minimum edge strength followed during one-hop expansion.
    pub expansion_min_strength: f64,
    /// Residents compared against a newly stored node.
    pub max_link_candidates: usize,
    /// Characteristic time scale of the temporal-proximity comparator.
    pub temporal_window_secs: u64,
}

impl Default for AssociationConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_ASSOCIATION_THRESHOLD,
            ema_alpha: defaults::DEFAULT_EMA_ALPHA,
            expansion_min_strength: defaults::DEFAULT_EXPANSION_MIN_STRENGTH,
            max_link_candidates: defaults::DEFAULT_MAX_LINK_CANDIDATES,
            temporal_window_secs: defaults::DEFAULT_TEMPORAL_WINDOW_SECS,
        }
    }
}
