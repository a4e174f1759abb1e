use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights of the three fusion scoring terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub relevance: f64,
    pub weight: f64,
    pub association: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            relevance: defaults::DEFAULT_RELEVANCE_WEIGHT,
            weight: defaults::DEFAULT_SALIENCE_WEIGHT,
            association: defaults::DEFAULT_ASSOCIATION_WEIGHT,
        }
    }
}

impl FusionWeights {
    pub fn sum(&self) -> f64 {
        self.relevance + self.weight + self.association
    }
}

/// Fusion engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Maximum number of nodes merged into one context.
    pub window: usize,
    /// Confidence multiplier floor applied when fewer than `window` candidates exist.
    pub sparse_penalty: f64,
    pub weights: FusionWeights,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_FUSION_WINDOW,
            sparse_penalty: defaults::DEFAULT_SPARSE_PENALTY,
            weights: FusionWeights::default(),
        }
    }
}
