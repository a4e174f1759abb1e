//! # strata-engine
//!
//! The perception-memory loop. [`Engine::process`] encodes an input into its
//! tier, retrieves from all five tiers, expands through the association
//! graph, fuses the activated memories and returns a [`ReasoningResult`].
//! Decay, promotion and snapshots run against the same engine.
//!
//! [`ReasoningResult`]: strata_core::models::ReasoningResult

pub mod cancellation;
pub mod context;
pub mod encoder;
pub mod engine;
pub mod promotion;
pub mod snapshot;

pub use cancellation::CancellationToken;
pub use context::ProcessContext;
pub use engine::{Engine, MaintenanceReport};
pub use promotion::{AccessCountPolicy, NoPromotion, Promotion};
pub use snapshot::InMemorySnapshotStore;
