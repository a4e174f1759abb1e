//! [`Engine`]: owns the five tiers, the association graph, the decay
//! scheduler and fusion, and runs the perception-memory loop over them.

mod maintenance;
mod persistence;
mod process;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use strata_association::AssociationEngine;
use strata_core::clock::{Clock, SystemClock};
use strata_core::errors::{ConfigError, StrataError, StrataResult};
use strata_core::memory::{MemoryNode, NodeContent, NodeId, TierKind};
use strata_core::models::{DegradationEvent, EdgeUpdate, MemoryStatus, ProcessingStats, TierStatus};
use strata_core::traits::{IMemoryTier, IPromotionPolicy};
use strata_core::StrataConfig;
use strata_decay::DecayScheduler;
use strata_fusion::FusionEngine;
use strata_observability::tracing_setup::events;
use strata_observability::{DegradationAlert, ObservabilityEngine};

use crate::promotion::AccessCountPolicy;

pub use maintenance::MaintenanceReport;

type TierSlot = RwLock<Box<dyn IMemoryTier>>;
type TierRead<'a> = RwLockReadGuard<'a, Box<dyn IMemoryTier>>;
type TierWrite<'a> = RwLockWriteGuard<'a, Box<dyn IMemoryTier>>;

/// The layered memory engine.
///
/// All operations take `&self`; tiers sit behind their own `RwLock` so the
/// read path can query them in parallel. Lock order is scheduler, then tiers
/// in `TierKind` order, then the association graph. No tier lock is held
/// while the graph lock is taken.
pub struct Engine {
    config: StrataConfig,
    clock: Arc<dyn Clock>,
    tiers: [TierSlot; TierKind::COUNT],
    associations: AssociationEngine,
    scheduler: Mutex<DecayScheduler>,
    fusion: FusionEngine,
    promotion: Box<dyn IPromotionPolicy>,
    observability: Mutex<ObservabilityEngine>,
}

impl Engine {
    /// Validate `config` and build an empty engine on the system clock.
    pub fn new(config: StrataConfig) -> StrataResult<Self> {
        config.validate()?;
        let tiers = strata_tiers::build_all(&config.tiers)
            .map(|store| RwLock::new(Box::new(store) as Box<dyn IMemoryTier>));
        let engine = Self {
            clock: Arc::new(SystemClock),
            tiers,
            associations: AssociationEngine::from_config(&config.association),
            scheduler: Mutex::new(DecayScheduler::from_config(&config.decay)),
            fusion: FusionEngine::new(config.fusion.clone()),
            promotion: Box::new(AccessCountPolicy::from_config(&config.promotion)),
            observability: Mutex::new(ObservabilityEngine::new()),
            config,
        };
        info!(
            version = strata_core::constants::VERSION,
            parallel_retrieval = engine.config.retrieval.parallel,
            promotion = engine.promotion.name(),
            "strata engine initialized"
        );
        Ok(engine)
    }

    /// Parse a TOML configuration and build an engine from it.
    pub fn from_toml(source: &str) -> StrataResult<Self> {
        Self::new(StrataConfig::from_toml(source)?)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_promotion_policy(mut self, policy: Box<dyn IPromotionPolicy>) -> Self {
        self.promotion = policy;
        self
    }

    /// Replace one tier's storage. The replacement must report the same kind.
    pub fn with_tier(mut self, tier: Box<dyn IMemoryTier>) -> StrataResult<Self> {
        let kind = tier.kind();
        if !tier.is_empty() {
            return Err(ConfigError::invalid(
                format!("tiers.{kind}"),
                "replacement tier must start empty",
            )
            .into());
        }
        self.tiers[kind.index()] = RwLock::new(tier);
        Ok(self)
    }

    pub fn config(&self) -> &StrataConfig {
        &self.config
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn associations(&self) -> &AssociationEngine {
        &self.associations
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// Per-tier occupancy and the size of the association graph.
    pub fn get_memory_status(&self) -> StrataResult<MemoryStatus> {
        let mut per_tier = BTreeMap::new();
        let mut total_nodes = 0;
        for kind in TierKind::ALL {
            let tier = self.read_tier(kind)?;
            let count = tier.len();
            total_nodes += count;
            per_tier.insert(
                kind,
                TierStatus {
                    count,
                    capacity: tier.capacity(),
                    avg_weight: tier.average_weight(),
                },
            );
        }
        Ok(MemoryStatus {
            per_tier,
            total_nodes,
            association_edges: self.associations.edge_count()?,
        })
    }

    /// Cumulative counters since construction.
    pub fn get_processing_stats(&self) -> ProcessingStats {
        self.observe(|o| o.processing_stats())
    }

    /// Metrics and pass-log summary as JSON.
    pub fn metrics_snapshot(&self) -> StrataResult<serde_json::Value> {
        self.observe(|o| o.metrics_snapshot())
    }

    /// Alerts raised by repeated or long-running degradations.
    pub fn degradation_alerts(&self) -> Vec<DegradationAlert> {
        let now = self.clock.now();
        self.observe(|o| o.degradation_alerts(now))
    }

    /// A copy of a resident node, wherever it lives.
    pub fn get_node(&self, id: &NodeId) -> Option<MemoryNode> {
        TierKind::ALL.into_iter().find_map(|kind| {
            let tier = self.tiers[kind.index()].read().ok()?;
            tier.get(id).cloned()
        })
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.is_resident(id)
    }

    /// Every resident node, ordered by tier then id.
    pub fn nodes(&self) -> StrataResult<Vec<MemoryNode>> {
        let mut all = Vec::new();
        for kind in TierKind::ALL {
            all.extend(self.read_tier(kind)?.nodes());
        }
        Ok(all)
    }

    // ── Direct writes ─────────────────────────────────────────────────────

    /// Store `content` in its tier outside of a processing pass and link it
    /// into the association graph. `weight` defaults to the tier's initial
    /// weight.
    pub fn insert(&self, content: NodeContent, weight: Option<f64>) -> StrataResult<NodeId> {
        let now = self.clock.now();
        let mut degradations = Vec::new();
        let id = self.admit(content, weight, now, &mut degradations)?;
        self.observe(|o| degradations.into_iter().for_each(|d| o.record_degradation(d)));
        Ok(id)
    }

    // ── Shared internals ──────────────────────────────────────────────────

    fn read_tier(&self, kind: TierKind) -> StrataResult<TierRead<'_>> {
        self.tiers[kind.index()]
            .read()
            .map_err(|e| StrataError::ConcurrencyError(format!("{kind} tier: {e}")))
    }

    fn write_tier(&self, kind: TierKind) -> StrataResult<TierWrite<'_>> {
        self.tiers[kind.index()]
            .write()
            .map_err(|e| StrataError::ConcurrencyError(format!("{kind} tier: {e}")))
    }

    /// Write-lock two distinct tiers in `TierKind` order.
    fn write_pair(&self, a: TierKind, b: TierKind) -> StrataResult<(TierWrite<'_>, TierWrite<'_>)> {
        if a.index() < b.index() {
            let first = self.write_tier(a)?;
            let second = self.write_tier(b)?;
            Ok((first, second))
        } else {
            let second = self.write_tier(b)?;
            let first = self.write_tier(a)?;
            Ok((first, second))
        }
    }

    /// True if some tier holds `id`. A poisoned tier counts as not holding it.
    fn is_resident(&self, id: &NodeId) -> bool {
        self.tiers
            .iter()
            .any(|slot| slot.read().map(|tier| tier.contains(id)).unwrap_or(false))
    }

    fn resident_count(&self) -> usize {
        self.tiers
            .iter()
            .filter_map(|slot| slot.read().ok().map(|tier| tier.len()))
            .sum()
    }

    /// Run `f` against the observability state. Metrics must never fail a
    /// pass, so a poisoned lock is recovered rather than reported.
    fn observe<T>(&self, f: impl FnOnce(&mut ObservabilityEngine) -> T) -> T {
        let mut guard = match self.observability.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    /// Store a new node, forget whatever capacity pressure pushed out, and
    /// link it to the current residents. Linking failures degrade rather
    /// than fail.
    fn admit(
        &self,
        content: NodeContent,
        weight: Option<f64>,
        now: chrono::DateTime<chrono::Utc>,
        degradations: &mut Vec<DegradationEvent>,
    ) -> StrataResult<NodeId> {
        let kind = content.tier();
        let weight = weight.unwrap_or(self.config.tiers.get(kind).initial_weight);
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(StrataError::malformed(format!(
                "weight must be a non-negative number, got {weight}"
            )));
        }
        let node = MemoryNode::new(content, weight, now)?;
        let id = node.id;

        let mut candidates = self.link_candidates()?;
        let evicted = self.write_tier(kind)?.store(node.clone())?;
        events::node_stored(&id.to_string(), kind.as_str(), weight);
        if let Some(victim) = evicted {
            candidates.retain(|c| c.id != victim.id);
            self.forget_evicted(&victim, degradations, now);
        }

        match self.associations.link_new_node(&node, &candidates) {
            Ok(written) => {
                let mut inserted = 0;
                for (other, update) in written {
                    if let EdgeUpdate::Inserted(a) = update {
                        inserted += 1;
                        events::association_formed(
                            &id.to_string(),
                            &other.to_string(),
                            a.kind.as_str(),
                            a.strength,
                        );
                    }
                }
                self.observe(|o| o.metrics.memory.record_associations(inserted));
            }
            Err(e) => {
                degradations.push(degradation("association", &e, "stored without links", now))
            }
        }
        Ok(id)
    }

    /// Up to `max_link_candidates` of the most recently accessed residents
    /// from each tier.
    fn link_candidates(&self) -> StrataResult<Vec<MemoryNode>> {
        let limit = self.config.association.max_link_candidates;
        let mut pool = Vec::new();
        for kind in TierKind::ALL {
            pool.extend(self.read_tier(kind)?.most_recent(limit));
        }
        Ok(pool)
    }

    /// Bookkeeping for a node pushed out by capacity pressure.
    fn forget_evicted(
        &self,
        victim: &MemoryNode,
        degradations: &mut Vec<DegradationEvent>,
        now: chrono::DateTime<chrono::Utc>,
    ) {
        events::node_evicted(&victim.id.to_string(), victim.tier.as_str(), "capacity");
        self.observe(|o| o.metrics.memory.record_capacity_eviction(victim.tier));
        if let Err(e) = self.associations.remove_node(&victim.id) {
            degradations.push(degradation("association", &e, "edges left for pruning", now));
        }
    }
}

pub(crate) fn degradation(
    component: &str,
    failure: &dyn std::fmt::Display,
    fallback: &str,
    now: chrono::DateTime<chrono::Utc>,
) -> DegradationEvent {
    DegradationEvent {
        component: component.to_string(),
        failure: failure.to_string(),
        fallback_used: fallback.to_string(),
        timestamp: now,
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("resident", &self.resident_count())
            .field("associations", &self.associations)
            .field("promotion", &self.promotion.name())
            .finish()
    }
}
