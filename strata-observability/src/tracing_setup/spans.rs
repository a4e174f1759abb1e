//! Span definitions per operation: processing pass, decay, fusion.

/// Create a span for one processing pass.
#[macro_export]
macro_rules! process_span {
    ($input_type:expr) => {
        tracing::info_span!("strata.process", input_type = %$input_type)
    };
}

/// Create a decay span.
#[macro_export]
macro_rules! decay_span {
    ($resident_count:expr) => {
        tracing::info_span!("strata.decay", resident_count = $resident_count)
    };
}

/// Create a fusion span.
#[macro_export]
macro_rules! fusion_span {
    ($candidates:expr, $window:expr) => {
        tracing::info_span!("strata.fusion", candidates = $candidates, window = $window)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PROCESS: &str = "strata.process";
    pub const DECAY: &str = "strata.decay";
    pub const FUSION: &str = "strata.fusion";
}
