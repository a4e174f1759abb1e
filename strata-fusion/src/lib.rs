//! # strata-fusion
//!
//! Merges the activation set of one processing pass (tier hits plus one-hop
//! association expansion) into a single [`FusedContext`]: candidates are
//! deduplicated, scored, cut to the fusion window, rendered per tier and
//! summarised by a rank-weighted confidence.
//!
//! [`FusedContext`]: strata_core::models::FusedContext

pub mod candidate;
pub mod confidence;
pub mod engine;
pub mod ranking;
pub mod render;

pub use candidate::FusionCandidate;
pub use engine::{FusionEngine, FusionOutcome};
pub use ranking::RankedCandidate;
