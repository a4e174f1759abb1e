use serde::{Deserialize, Serialize};
use std::fmt;

/// Salience score in `[0, ∞)`.
///
/// Construction clamps negatives (and NaN) to zero, so a `Weight` can never
/// hold a negative value. A weight of exactly zero marks a node as
/// eviction-eligible and invisible to retrieval.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const ONE: Weight = Weight(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() || value < 0.0 {
            Self(0.0)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Weight squashed into `[0, 1]` for scoring.
    pub fn normalized(self) -> f64 {
        self.0.min(1.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> Self {
        w.0
    }
}
