//! Cooperative cancellation for processing passes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use strata_core::models::LoopState;

/// Cooperative cancellation token wrapping an `AtomicBool`.
///
/// A pass checks the token when it enters `Encoding`, `Retrieving`,
/// `Expanding` and `Fusing`. Work already done in earlier states is kept:
/// a node stored during encoding stays stored.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    trip_at: Option<LoopState>,
}

impl CancellationToken {
    /// Create a new cancellation token (not cancelled).
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            trip_at: None,
        }
    }

    /// A token that cancels itself when the pass reaches `state`.
    pub fn at_state(state: LoopState) -> Self {
        Self {
            trip_at: Some(state),
            ..Self::new()
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Clear the flag so the token can be reused for another pass.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }

    /// Checked by the engine on entering `state`.
    pub(crate) fn should_stop(&self, state: LoopState) -> bool {
        if self.trip_at == Some(state) {
            self.cancel();
        }
        self.is_cancelled()
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
