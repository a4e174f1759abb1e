//! Forgetting curves. All are pure functions of
//! `(initial_weight, elapsed_hours, access_count)`.

pub mod ebbinghaus;
pub mod exponential;
pub mod power_law;

pub use ebbinghaus::EbbinghausCurve;
pub use exponential::ExponentialCurve;
pub use power_law::PowerLawCurve;

use strata_core::config::DecayFunction;
use strata_core::traits::IDecayCurve;

/// Build the curve described by a tier's configuration.
pub fn curve_for(function: &DecayFunction) -> Box<dyn IDecayCurve> {
    match *function {
        DecayFunction::Exponential { lambda } => Box::new(ExponentialCurve::new(lambda)),
        DecayFunction::PowerLaw { alpha } => Box::new(PowerLawCurve::new(alpha)),
        DecayFunction::Ebbinghaus { strength, beta } => {
            Box::new(EbbinghausCurve::new(strength, beta))
        }
    }
}

/// Negative, NaN and infinite inputs are treated as "no time has passed".
pub(crate) fn sanitize_elapsed(elapsed_hours: f64) -> f64 {
    if elapsed_hours.is_finite() && elapsed_hours > 0.0 {
        elapsed_hours
    } else {
        0.0
    }
}

pub(crate) fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}
