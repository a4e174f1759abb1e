use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay curve selection with its parameters. Time is measured in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecayFunction {
    /// `w0 · e^(−λ·t)`
    Exponential { lambda: f64 },
    /// `w0 · (1 + t)^(−α)`
    PowerLaw { alpha: f64 },
    /// `w0 · e^(−t / (S · (1 + β·accesses)))`
    Ebbinghaus { strength: f64, beta: f64 },
}

impl DecayFunction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exponential { .. } => "exponential",
            Self::PowerLaw { .. } => "power_law",
            Self::Ebbinghaus { .. } => "ebbinghaus",
        }
    }
}

/// Decay scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Minimum seconds between scheduled ticks.
    pub interval_secs: u64,
    /// Run a due tick before every retrieval pass.
    pub tick_before_retrieval: bool,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            interval_secs: defaults::DEFAULT_DECAY_INTERVAL_SECS,
            tick_before_retrieval: defaults::DEFAULT_TICK_BEFORE_RETRIEVAL,
        }
    }
}
