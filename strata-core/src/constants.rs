/// Strata engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of memory tiers owned by one engine.
pub const TIER_COUNT: usize = 5;

/// Seconds per decay time unit. Decay curves are parameterised per hour.
pub const SECONDS_PER_DECAY_UNIT: f64 = 3600.0;

/// Marker text returned by fusion when nothing was activated.
pub const NO_RELEVANT_MEMORY: &str = "no relevant memory";

/// Upper bound on `top_k` accepted from request context.
pub const MAX_TOP_K: usize = 100;
