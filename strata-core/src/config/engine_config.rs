use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval fan-out configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k_per_tier: usize,
    /// Query the five tiers concurrently.
    pub parallel: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k_per_tier: defaults::DEFAULT_TOP_K_PER_TIER,
            parallel: defaults::DEFAULT_PARALLEL_RETRIEVAL,
        }
    }
}

/// Cross-tier promotion policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionConfig {
    pub enabled: bool,
    /// Working nodes accessed at least this often move to the episodic tier.
    pub working_access_threshold: u64,
}

impl Default for PromotionConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_PROMOTION_ENABLED,
            working_access_threshold: defaults::DEFAULT_WORKING_ACCESS_THRESHOLD,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
