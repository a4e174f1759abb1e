/// A pure forgetting curve.
pub trait IDecayCurve: Send + Sync {
    fn name(&self) -> &'static str;

    /// Weight after `elapsed_hours` starting from `initial_weight`.
    /// Must be non-increasing in `elapsed_hours` and never negative.
    fn decayed_weight(&self, initial_weight: f64, elapsed_hours: f64, access_count: u64) -> f64;
}
