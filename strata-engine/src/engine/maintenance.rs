//! Decay ticks and cross-tier promotion.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use strata_core::errors::{StrataError, StrataResult};
use strata_core::memory::{MemoryNode, NodeId, TierKind};
use strata_core::models::DecayReport;
use strata_decay::DecayScheduler;
use strata_observability::decay_span;
use strata_observability::tracing_setup::events;

use super::Engine;
use crate::promotion::Promotion;

/// What one maintenance run did.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceReport {
    pub decay: DecayReport,
    pub edges_pruned: usize,
    pub promoted: Vec<Promotion>,
}

impl Engine {
    /// Decay every tier now, evict what fell under threshold and prune the
    /// association graph.
    pub fn decay_tick(&self) -> StrataResult<DecayReport> {
        self.decay_tick_at(self.clock.now())
    }

    pub fn decay_tick_at(&self, now: DateTime<Utc>) -> StrataResult<DecayReport> {
        let mut scheduler = self.lock_scheduler()?;
        self.run_decay(&mut scheduler, now).map(|(report, _)| report)
    }

    /// Tick only if the configured interval has elapsed.
    pub(super) fn decay_if_due(&self, now: DateTime<Utc>) -> StrataResult<Option<DecayReport>> {
        let mut scheduler = self.lock_scheduler()?;
        if !scheduler.is_due(now) {
            return Ok(None);
        }
        self.run_decay(&mut scheduler, now)
            .map(|(report, _)| Some(report))
    }

    /// A decay tick followed by a promotion sweep.
    pub fn maintain(&self) -> StrataResult<MaintenanceReport> {
        self.maintain_at(self.clock.now())
    }

    pub fn maintain_at(&self, now: DateTime<Utc>) -> StrataResult<MaintenanceReport> {
        let (decay, edges_pruned) = {
            let mut scheduler = self.lock_scheduler()?;
            self.run_decay(&mut scheduler, now)?
        };
        let promoted = if self.config.promotion.enabled {
            self.promote_eligible(now)?
        } else {
            Vec::new()
        };
        Ok(MaintenanceReport {
            decay,
            edges_pruned,
            promoted,
        })
    }

    /// Move `id` into tier `to`, keeping its identity, statistics and edges.
    ///
    /// Returns `false` if the node is gone, already there, or its content
    /// has no shape in the target tier. If the target rejects the node it is
    /// put back where it was and the error returned.
    pub fn promote(&self, id: &NodeId, to: TierKind) -> StrataResult<bool> {
        let Some(from) = self.get_node(id).map(|n| n.tier) else {
            return Ok(false);
        };
        self.move_node(id, from, to, self.clock.now())
    }

    fn lock_scheduler(&self) -> StrataResult<std::sync::MutexGuard<'_, DecayScheduler>> {
        self.scheduler
            .lock()
            .map_err(|e| StrataError::ConcurrencyError(format!("decay scheduler: {e}")))
    }

    fn run_decay(
        &self,
        scheduler: &mut DecayScheduler,
        now: DateTime<Utc>,
    ) -> StrataResult<(DecayReport, usize)> {
        let span = decay_span!(self.resident_count());
        let _entered = span.enter();

        let mut report = DecayReport::new(now);
        for kind in TierKind::ALL {
            let before = report.evicted_ids.len();
            {
                let mut tier = self.write_tier(kind)?;
                DecayScheduler::tick_tier(&mut **tier, now, &mut report);
            }
            for id in &report.evicted_ids[before..] {
                events::node_evicted(&id.to_string(), kind.as_str(), "decay");
            }
        }
        scheduler.complete(&report);

        let pruned = self.associations.prune(|id| self.is_resident(id))?;
        self.observe(|o| o.metrics.memory.record_decay(&report, pruned.edges_removed));
        events::decay_tick_completed(report.total_evicted, pruned.edges_removed);
        Ok((report, pruned.edges_removed))
    }

    fn promote_eligible(&self, now: DateTime<Utc>) -> StrataResult<Vec<Promotion>> {
        let mut planned = Vec::new();
        for kind in TierKind::ALL {
            let tier = self.read_tier(kind)?;
            for node in tier.nodes() {
                if let Some(to) = self.promotion.destination(&node, now) {
                    if to != kind {
                        planned.push(Promotion {
                            id: node.id,
                            from: kind,
                            to,
                        });
                    }
                }
            }
        }

        let mut done = Vec::with_capacity(planned.len());
        for p in planned {
            match self.move_node(&p.id, p.from, p.to, now) {
                Ok(true) => done.push(p),
                Ok(false) => {}
                Err(e) => {
                    warn!(node = %p.id, from = %p.from, to = %p.to, error = %e, "promotion failed")
                }
            }
        }
        Ok(done)
    }

    fn move_node(
        &self,
        id: &NodeId,
        from: TierKind,
        to: TierKind,
        now: DateTime<Utc>,
    ) -> StrataResult<bool> {
        if from == to {
            return Ok(false);
        }
        let evicted: Option<MemoryNode> = {
            let (mut source, mut target) = self.write_pair(from, to)?;
            let Some(node) = source.get(id).cloned() else {
                return Ok(false);
            };
            let Some(content) = node.content.promote_to(to) else {
                debug!(node = %id, %from, %to, "no content mapping for promotion");
                return Ok(false);
            };
            let moved = node.rehome(content)?;
            let original = source.remove(id)?;
            match target.store(moved) {
                Ok(evicted) => evicted,
                Err(e) => {
                    source.store(original)?;
                    return Err(e.into());
                }
            }
        };

        events::node_promoted(&id.to_string(), from.as_str(), to.as_str());
        self.observe(|o| o.metrics.memory.record_promotion());
        if let Some(victim) = evicted {
            let mut degradations = Vec::new();
            self.forget_evicted(&victim, &mut degradations, now);
            self.observe(|o| degradations.into_iter().for_each(|d| o.record_degradation(d)));
        }
        Ok(true)
    }
}
