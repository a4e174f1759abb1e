use strata_core::traits::IDecayCurve;

use super::{sanitize_elapsed, sanitize_weight};

/// `w0 · e^(−t / (S · (1 + β·n)))`.
///
/// `S` is the memory strength in hours and `n` the access count: every recall
/// stretches the curve, so well-rehearsed memories fade more slowly.
#[derive(Debug, Clone, Copy)]
pub struct EbbinghausCurve {
    strength: f64,
    beta: f64,
}

impl EbbinghausCurve {
    pub fn new(strength: f64, beta: f64) -> Self {
        Self {
            strength,
            beta: beta.max(0.0),
        }
    }

    /// Effective strength after `access_count` recalls.
    pub fn effective_strength(&self, access_count: u64) -> f64 {
        self.strength * (1.0 + self.beta * access_count as f64)
    }
}

impl IDecayCurve for EbbinghausCurve {
    fn name(&self) -> &'static str {
        "ebbinghaus"
    }

    fn decayed_weight(&self, initial_weight: f64, elapsed_hours: f64, access_count: u64) -> f64 {
        let t = sanitize_elapsed(elapsed_hours);
        let s = self.effective_strength(access_count);
        if !(s.is_finite() && s > 0.0) {
            // Zero strength forgets instantly; infinite strength never forgets.
            return if s.is_infinite() {
                sanitize_weight(initial_weight)
            } else if t > 0.0 {
                0.0
            } else {
                sanitize_weight(initial_weight)
            };
        }
        sanitize_weight(initial_weight) * (-t / s).exp()
    }
}
