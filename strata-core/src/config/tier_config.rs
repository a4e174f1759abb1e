use serde::{Deserialize, Serialize};

use super::decay_config::DecayFunction;
use super::defaults;
use crate::memory::TierKind;

/// Storage, reinforcement and decay policy for one tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierConfig {
    /// Maximum resident nodes.
    pub capacity: usize,
    /// Weight assigned to new nodes unless the caller supplies one.
    pub initial_weight: f64,
    /// Nodes whose post-decay weight is at or below this are evicted.
    pub eviction_threshold: f64,
    /// Touch reinforcement never lifts weight past this.
    pub weight_ceiling: f64,
    /// Weight added per touch.
    pub touch_boost: f64,
    /// Reject instead of churning when the weakest resident outweighs the newcomer.
    pub protect_minimum: bool,
    /// Retrieval cut-off for tier relevance scores.
    pub min_relevance: f64,
    pub decay: DecayFunction,
}

impl TierConfig {
    pub fn working() -> Self {
        Self {
            capacity: defaults::WORKING_CAPACITY,
            initial_weight: defaults::DEFAULT_INITIAL_WEIGHT,
            eviction_threshold: defaults::WORKING_EVICTION_THRESHOLD,
            weight_ceiling: defaults::WORKING_WEIGHT_CEILING,
            touch_boost: defaults::WORKING_TOUCH_BOOST,
            protect_minimum: defaults::DEFAULT_PROTECT_MINIMUM,
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
            decay: DecayFunction::Exponential {
                lambda: defaults::WORKING_DECAY_LAMBDA,
            },
        }
    }

    pub fn episodic() -> Self {
        Self {
            capacity: defaults::EPISODIC_CAPACITY,
            initial_weight: defaults::DEFAULT_INITIAL_WEIGHT,
            eviction_threshold: defaults::EPISODIC_EVICTION_THRESHOLD,
            weight_ceiling: defaults::EPISODIC_WEIGHT_CEILING,
            touch_boost: defaults::EPISODIC_TOUCH_BOOST,
            protect_minimum: defaults::DEFAULT_PROTECT_MINIMUM,
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
            decay: DecayFunction::Ebbinghaus {
                strength: defaults::EPISODIC_DECAY_STRENGTH,
                beta: defaults::EPISODIC_DECAY_BETA,
            },
        }
    }

    pub fn semantic() -> Self {
        Self {
            capacity: defaults::SEMANTIC_CAPACITY,
            initial_weight: defaults::DEFAULT_INITIAL_WEIGHT,
            eviction_threshold: defaults::SEMANTIC_EVICTION_THRESHOLD,
            weight_ceiling: defaults::SEMANTIC_WEIGHT_CEILING,
            touch_boost: defaults::SEMANTIC_TOUCH_BOOST,
            protect_minimum: defaults::DEFAULT_PROTECT_MINIMUM,
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
            decay: DecayFunction::PowerLaw {
                alpha: defaults::SEMANTIC_DECAY_ALPHA,
            },
        }
    }

    pub fn procedural() -> Self {
        Self {
            capacity: defaults::PROCEDURAL_CAPACITY,
            initial_weight: defaults::DEFAULT_INITIAL_WEIGHT,
            eviction_threshold: defaults::PROCEDURAL_EVICTION_THRESHOLD,
            weight_ceiling: defaults::PROCEDURAL_WEIGHT_CEILING,
            touch_boost: defaults::PROCEDURAL_TOUCH_BOOST,
            protect_minimum: defaults::DEFAULT_PROTECT_MINIMUM,
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
            decay: DecayFunction::Ebbinghaus {
                strength: defaults::PROCEDURAL_DECAY_STRENGTH,
                beta: defaults::PROCEDURAL_DECAY_BETA,
            },
        }
    }

    pub fn emotional() -> Self {
        Self {
            capacity: defaults::EMOTIONAL_CAPACITY,
            initial_weight: defaults::DEFAULT_INITIAL_WEIGHT,
            eviction_threshold: defaults::EMOTIONAL_EVICTION_THRESHOLD,
            weight_ceiling: defaults::EMOTIONAL_WEIGHT_CEILING,
            touch_boost: defaults::EMOTIONAL_TOUCH_BOOST,
            protect_minimum: defaults::DEFAULT_PROTECT_MINIMUM,
            min_relevance: defaults::DEFAULT_MIN_RELEVANCE,
            decay: DecayFunction::PowerLaw {
                alpha: defaults::EMOTIONAL_DECAY_ALPHA,
            },
        }
    }

    /// Default policy for a tier.
    pub fn for_tier(kind: TierKind) -> Self {
        match kind {
            TierKind::Working => Self::working(),
            TierKind::Episodic => Self::episodic(),
            TierKind::Semantic => Self::semantic(),
            TierKind::Procedural => Self::procedural(),
            TierKind::Emotional => Self::emotional(),
        }
    }
}

/// Partially specified tier section, as it appears in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
struct TierOverride {
    capacity: Option<usize>,
    initial_weight: Option<f64>,
    eviction_threshold: Option<f64>,
    weight_ceiling: Option<f64>,
    touch_boost: Option<f64>,
    protect_minimum: Option<bool>,
    min_relevance: Option<f64>,
    decay: Option<DecayFunction>,
}

impl TierOverride {
    fn apply(self, mut base: TierConfig) -> TierConfig {
        if let Some(v) = self.capacity {
            base.capacity = v;
        }
        if let Some(v) = self.initial_weight {
            base.initial_weight = v;
        }
        if let Some(v) = self.eviction_threshold {
            base.eviction_threshold = v;
        }
        if let Some(v) = self.weight_ceiling {
            base.weight_ceiling = v;
        }
        if let Some(v) = self.touch_boost {
            base.touch_boost = v;
        }
        if let Some(v) = self.protect_minimum {
            base.protect_minimum = v;
        }
        if let Some(v) = self.min_relevance {
            base.min_relevance = v;
        }
        if let Some(v) = self.decay {
            base.decay = v;
        }
        base
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTiers {
    working: TierOverride,
    episodic: TierOverride,
    semantic: TierOverride,
    procedural: TierOverride,
    emotional: TierOverride,
}

/// Per-tier policies. Omitted fields fall back to that tier's own defaults,
/// not to a shared default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawTiers")]
pub struct TiersConfig {
    pub working: TierConfig,
    pub episodic: TierConfig,
    pub semantic: TierConfig,
    pub procedural: TierConfig,
    pub emotional: TierConfig,
}

impl TiersConfig {
    pub fn get(&self, kind: TierKind) -> &TierConfig {
        match kind {
            TierKind::Working => &self.working,
            TierKind::Episodic => &self.episodic,
            TierKind::Semantic => &self.semantic,
            TierKind::Procedural => &self.procedural,
            TierKind::Emotional => &self.emotional,
        }
    }

    pub fn get_mut(&mut self, kind: TierKind) -> &mut TierConfig {
        match kind {
            TierKind::Working => &mut self.working,
            TierKind::Episodic => &mut self.episodic,
            TierKind::Semantic => &mut self.semantic,
            TierKind::Procedural => &mut self.procedural,
            TierKind::Emotional => &mut self.emotional,
        }
    }
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            working: TierConfig::working(),
            episodic: TierConfig::episodic(),
            semantic: TierConfig::semantic(),
            procedural: TierConfig::procedural(),
            emotional: TierConfig::emotional(),
        }
    }
}

impl From<RawTiers> for TiersConfig {
    fn from(raw: RawTiers) -> Self {
        Self {
            working: raw.working.apply(TierConfig::working()),
            episodic: raw.episodic.apply(TierConfig::episodic()),
            semantic: raw.semantic.apply(TierConfig::semantic()),
            procedural: raw.procedural.apply(TierConfig::procedural()),
            emotional: raw.emotional.apply(TierConfig::emotional()),
        }
    }
}
