use super::{ConfigError, GraphError, TierError};

/// Top-level error for the Strata engine.
///
/// Only `MalformedInput` and `ConfigError` ever reach a caller of the
/// orchestrator; tier and graph failures are folded into a lower-confidence
/// result inside a processing pass.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("tier error: {0}")]
    TierError(#[from] TierError),

    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("snapshot error: {reason}")]
    SnapshotError { reason: String },
}

impl StrataError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Hard failures are the only errors surfaced by `process`.
    pub fn is_hard_failure(&self) -> bool {
        matches!(self, Self::MalformedInput { .. } | Self::ConfigError(_))
    }
}
