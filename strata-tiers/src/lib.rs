//! # strata-tiers
//!
//! The five memory tiers. Every tier is a [`TierStore`]: the same bounded
//! storage, eviction and decay machinery, parameterised by a `TierConfig` and
//! a tier-specific relevance scorer from [`scoring`].

pub mod scoring;
pub mod store;

pub use store::TierStore;

use strata_core::config::TiersConfig;
use strata_core::TierKind;

/// One store per tier, in `TierKind::ALL` order.
pub fn build_all(config: &TiersConfig) -> [TierStore; TierKind::COUNT] {
    TierKind::ALL.map(|kind| TierStore::new(kind, config.get(kind).clone()))
}
