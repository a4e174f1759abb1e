mod config_error;
mod graph_error;
mod strata_error;
mod tier_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use strata_error::StrataError;
pub use tier_error::TierError;

/// Convenience alias used across the workspace.
pub type StrataResult<T> = Result<T, StrataError>;
