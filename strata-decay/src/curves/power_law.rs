use strata_core::traits::IDecayCurve;

use super::{sanitize_elapsed, sanitize_weight};

/// `w0 · (1 + t)^(−α)`. Heavy-tailed: fast early loss, then a long plateau.
#[derive(Debug, Clone, Copy)]
pub struct PowerLawCurve {
    alpha: f64,
}

impl PowerLawCurve {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.max(0.0),
        }
    }
}

impl IDecayCurve for PowerLawCurve {
    fn name(&self) -> &'static str {
        "power_law"
    }

    fn decayed_weight(&self, initial_weight: f64, elapsed_hours: f64, _access_count: u64) -> f64 {
        let t = sanitize_elapsed(elapsed_hours);
        sanitize_weight(initial_weight) * (1.0 + t).powf(-self.alpha)
    }
}
