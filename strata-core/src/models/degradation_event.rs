use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recoverable failure swallowed during a processing pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
