pub mod association_config;
pub mod decay_config;
pub mod defaults;
pub mod engine_config;
pub mod fusion_config;
pub mod tier_config;

use serde::{Deserialize, Serialize};

pub use association_config::AssociationConfig;
pub use decay_config::{DecayConfig, DecayFunction};
pub use engine_config::{ObservabilityConfig, PromotionConfig, RetrievalConfig};
pub use fusion_config::{FusionConfig, FusionWeights};
pub use tier_config::{TierConfig, TiersConfig};

use crate::errors::ConfigError;
use crate::memory::TierKind;

/// Top-level engine configuration, supplied once at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    pub tiers: TiersConfig,
    pub decay: DecayConfig,
    pub association: AssociationConfig,
    pub fusion: FusionConfig,
    pub retrieval: RetrievalConfig,
    pub promotion: PromotionConfig,
    pub observability: ObservabilityConfig,
}

impl StrataConfig {
    /// Parse from TOML. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject configurations the engine cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in TierKind::ALL {
            validate_tier(kind, self.tiers.get(kind))?;
        }

        let a = &self.association;
        unit_interval("association.threshold", a.threshold)?;
        unit_interval("association.expansion_min_strength", a.expansion_min_strength)?;
        if !(a.ema_alpha > 0.0 && a.ema_alpha <= 1.0) {
            return Err(ConfigError::out_of_range(
                "association.ema_alpha",
                a.ema_alpha,
                f64::MIN_POSITIVE,
                1.0,
            ));
        }
        if a.temporal_window_secs == 0 {
            return Err(ConfigError::invalid(
                "association.temporal_window_secs",
                "must be greater than zero",
            ));
        }

        let f = &self.fusion;
        if f.window == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "fusion.window".into(),
            });
        }
        let w = &f.weights;
        for (name, value) in [
            ("fusion.weights.relevance", w.relevance),
            ("fusion.weights.weight", w.weight),
            ("fusion.weights.association", w.association),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(name, "must be a non-negative number"));
            }
        }
        if w.sum() <= 0.0 {
            return Err(ConfigError::invalid(
                "fusion.weights",
                "at least one weight must be positive",
            ));
        }
        if !(f.sparse_penalty > 0.0 && f.sparse_penalty <= 1.0) {
            return Err(ConfigError::out_of_range(
                "fusion.sparse_penalty",
                f.sparse_penalty,
                f64::MIN_POSITIVE,
                1.0,
            ));
        }

        if self.retrieval.top_k_per_tier == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "retrieval.top_k_per_tier".into(),
            });
        }
        Ok(())
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(field, value, 0.0, 1.0))
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be a positive number"))
    }
}

fn validate_tier(kind: TierKind, cfg: &TierConfig) -> Result<(), ConfigError> {
    let field = |name: &str| format!("tiers.{kind}.{name}");

    if cfg.capacity == 0 {
        return Err(ConfigError::ZeroCapacity {
            field: field("capacity"),
        });
    }
    unit_interval(&field("eviction_threshold"), cfg.eviction_threshold)?;
    unit_interval(&field("min_relevance"), cfg.min_relevance)?;
    positive(&field("initial_weight"), cfg.initial_weight)?;
    if !(cfg.touch_boost.is_finite() && cfg.touch_boost >= 0.0) {
        return Err(ConfigError::invalid(
            field("touch_boost"),
            "must be a non-negative number",
        ));
    }
    if !(cfg.weight_ceiling.is_finite() && cfg.weight_ceiling >= cfg.initial_weight) {
        return Err(ConfigError::invalid(
            field("weight_ceiling"),
            format!(
                "{} must be finite and at least initial_weight {}",
                cfg.weight_ceiling, cfg.initial_weight
            ),
        ));
    }
    match cfg.decay {
        DecayFunction::Exponential { lambda } => positive(&field("decay.lambda"), lambda),
        DecayFunction::PowerLaw { alpha } => positive(&field("decay.alpha"), alpha),
        DecayFunction::Ebbinghaus { strength, beta } => {
            positive(&field("decay.strength"), strength)?;
            if beta.is_finite() && beta >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::invalid(
                    field("decay.beta"),
                    "must be a non-negative number",
                ))
            }
        }
    }
}
