//! # strata-decay
//!
//! Time and usage based weight reduction for memory nodes.
//!
//! Three forgetting curves (exponential, power-law, Ebbinghaus) behind the
//! `IDecayCurve` trait, the per-node decay formula with an observable
//! breakdown, eviction decisions, and a pull-based `DecayScheduler` that
//! drives `decay_tick` on every tier.

pub mod curves;
pub mod eviction;
pub mod formula;
pub mod scheduler;

pub use curves::{curve_for, EbbinghausCurve, ExponentialCurve, PowerLawCurve};
pub use eviction::EvictionDecision;
pub use formula::DecayBreakdown;
pub use scheduler::DecayScheduler;
