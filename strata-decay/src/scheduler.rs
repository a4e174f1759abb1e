use chrono::{DateTime, Duration, Utc};
use strata_core::config::DecayConfig;
use strata_core::models::DecayReport;
use strata_core::traits::IMemoryTier;
use tracing::debug;

/// Pull-based decay driver.
///
/// Holds no timers. Callers invoke [`tick`](Self::tick) directly or
/// [`tick_if_due`](Self::tick_if_due) from whatever cadence they own (a
/// background timer, or the read path before retrieval).
#[derive(Debug, Clone)]
pub struct DecayScheduler {
    interval: Duration,
    last_tick: Option<DateTime<Utc>>,
    ticks_total: u64,
    evictions_total: u64,
}

impl DecayScheduler {
    pub fn new(interval_secs: u64) -> Self {
        let secs = i64::try_from(interval_secs).unwrap_or(i64::MAX);
        Self {
            interval: Duration::try_seconds(secs).unwrap_or(Duration::MAX),
            last_tick: None,
            ticks_total: 0,
            evictions_total: 0,
        }
    }

    pub fn from_config(config: &DecayConfig) -> Self {
        Self::new(config.interval_secs)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_tick(&self) -> Option<DateTime<Utc>> {
        self.last_tick
    }

    pub fn ticks_total(&self) -> u64 {
        self.ticks_total
    }

    pub fn evictions_total(&self) -> u64 {
        self.evictions_total
    }

    /// True if no tick has run yet or the interval has fully elapsed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.last_tick {
            None => true,
            Some(last) => now - last >= self.interval,
        }
    }

    /// Decay one tier and fold its evictions into `report`.
    pub fn tick_tier(tier: &mut dyn IMemoryTier, now: DateTime<Utc>, report: &mut DecayReport) {
        let kind = tier.kind();
        let evicted = tier.decay_tick(now);
        debug!(tier = %kind, evicted = evicted.len(), remaining = tier.len(), "tier decayed");
        report.record(kind, evicted);
    }

    /// Decay every tier unconditionally.
    pub fn tick(&mut self, now: DateTime<Utc>, tiers: &mut [&mut dyn IMemoryTier]) -> DecayReport {
        let mut report = DecayReport::new(now);
        for tier in tiers.iter_mut() {
            Self::tick_tier(&mut **tier, now, &mut report);
        }
        self.complete(&report);
        report
    }

    /// Decay every tier if the interval has elapsed since the previous tick.
    pub fn tick_if_due(
        &mut self,
        now: DateTime<Utc>,
        tiers: &mut [&mut dyn IMemoryTier],
    ) -> Option<DecayReport> {
        if self.is_due(now) {
            Some(self.tick(now, tiers))
        } else {
            None
        }
    }

    /// Record a tick assembled tier by tier through [`tick_tier`](Self::tick_tier).
    pub fn complete(&mut self, report: &DecayReport) {
        self.ticks_total += 1;
        self.evictions_total += report.total_evicted as u64;
        self.last_tick = Some(match self.last_tick {
            Some(prev) if prev > report.at => prev,
            _ => report.at,
        });
    }
}

impl Default for DecayScheduler {
    fn default() -> Self {
        Self::from_config(&DecayConfig::default())
    }
}
