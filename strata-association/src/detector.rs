//! Picks the single typed association between two nodes.

use serde::Serialize;

use strata_core::config::AssociationConfig;
use strata_core::memory::MemoryNode;
use strata_core::models::{Association, AssociationType};
use strata_core::traits::IAssociationComparator;

use crate::strategies;

/// One comparator's contribution to a detection.
#[derive(Debug, Clone, Serialize)]
pub struct ComparatorScore {
    pub comparator: &'static str,
    pub kind: AssociationType,
    pub strength: f64,
}

/// Every comparator score for a pair, plus the verdict.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionBreakdown {
    pub scores: Vec<ComparatorScore>,
    /// The strongest signal, whether or not it cleared the threshold.
    pub best: Option<Association>,
    pub threshold: f64,
}

impl DetectionBreakdown {
    /// The association to record, if the best signal cleared the threshold.
    pub fn accepted(&self) -> Option<Association> {
        self.best
            .filter(|a| a.strength > 0.0 && a.strength >= self.threshold)
    }
}

/// Runs every comparator over a pair and keeps the strongest typed signal.
pub struct AssociationDetector {
    comparators: Vec<Box<dyn IAssociationComparator>>,
    threshold: f64,
}

impl AssociationDetector {
    pub fn new(comparators: Vec<Box<dyn IAssociationComparator>>, threshold: f64) -> Self {
        Self {
            comparators,
            threshold,
        }
    }

    pub fn from_config(config: &AssociationConfig) -> Self {
        Self::new(strategies::default_comparators(config), config.threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn comparator_names(&self) -> Vec<&'static str> {
        self.comparators.iter().map(|c| c.name()).collect()
    }

    /// The association between `a` and `b`, or `None` when no comparator
    /// reaches the threshold. Symmetric in its arguments.
    pub fn detect(&self, a: &MemoryNode, b: &MemoryNode) -> Option<Association> {
        if a.id == b.id {
            return None;
        }
        self.detect_detailed(a, b).accepted()
    }

    /// Like [`detect`](Self::detect) but keeps every comparator's score.
    pub fn detect_detailed(&self, a: &MemoryNode, b: &MemoryNode) -> DetectionBreakdown {
        let scores: Vec<ComparatorScore> = self
            .comparators
            .iter()
            .map(|c| ComparatorScore {
                comparator: c.name(),
                kind: c.kind(),
                strength: Association::new(c.kind(), c.compare(a, b)).strength,
            })
            .collect();

        let best = scores
            .iter()
            .map(|s| Association::new(s.kind, s.strength))
            .fold(None::<Association>, |best, candidate| match best {
                Some(b) if !candidate.outranks(&b) => Some(b),
                _ => Some(candidate),
            });

        DetectionBreakdown {
            scores,
            best,
            threshold: self.threshold,
        }
    }
}

impl std::fmt::Debug for AssociationDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssociationDetector")
            .field("comparators", &self.comparator_names())
            .field("threshold", &self.threshold)
            .finish()
    }
}
