//! # strata-core
//!
//! Foundation crate for the Strata layered memory engine.
//! Defines the memory node model, errors, config, traits, shared models and
//! the small text utilities every tier and comparator relies on.
//! Every other crate in the workspace depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::StrataConfig;
pub use errors::{StrataError, StrataResult};
pub use memory::{MemoryNode, NodeContent, NodeId, TierKind, Weight};
