use strata_core::traits::IDecayCurve;

use super::{sanitize_elapsed, sanitize_weight};

/// `w0 · e^(−λ·t)`. The fastest of the three; used for working memory.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialCurve {
    lambda: f64,
}

impl ExponentialCurve {
    pub fn new(lambda: f64) -> Self {
        Self {
            lambda: lambda.max(0.0),
        }
    }

    /// Hours until the weight halves.
    pub fn half_life_hours(&self) -> f64 {
        if self.lambda == 0.0 {
            f64::INFINITY
        } else {
            std::f64::consts::LN_2 / self.lambda
        }
    }
}

impl IDecayCurve for ExponentialCurve {
    fn name(&self) -> &'static str {
        "exponential"
    }

    fn decayed_weight(&self, initial_weight: f64, elapsed_hours: f64, _access_count: u64) -> f64 {
        let t = sanitize_elapsed(elapsed_hours);
        sanitize_weight(initial_weight) * (-self.lambda * t).exp()
    }
}
