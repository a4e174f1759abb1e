use serde::{Deserialize, Serialize};
use std::fmt;

/// The four relationship kinds an association edge can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationType {
    Semantic,
    Temporal,
    Causal,
    Affective,
}

impl AssociationType {
    pub const ALL: [AssociationType; 4] = [
        Self::Semantic,
        Self::Temporal,
        Self::Causal,
        Self::Affective,
    ];

    /// Tie-break rank when two comparators report the same strength.
    /// Higher wins.
    pub fn priority(self) -> u8 {
        match self {
            Self::Causal => 3,
            Self::Affective => 2,
            Self::Semantic => 1,
            Self::Temporal => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Semantic => "semantic",
            Self::Temporal => "temporal",
            Self::Causal => "causal",
            Self::Affective => "affective",
        }
    }
}

impl fmt::Display for AssociationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, strength-scored relationship between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub kind: AssociationType,
    /// Always in `[0, 1]`.
    pub strength: f64,
}

impl Association {
    /// Build an association, clamping strength into `[0, 1]` (NaN becomes 0).
    pub fn new(kind: AssociationType, strength: f64) -> Self {
        let strength = if strength.is_nan() {
            0.0
        } else {
            strength.clamp(0.0, 1.0)
        };
        Self { kind, strength }
    }

    /// True if `self` should be preferred over `other`: stronger, or equally
    /// strong with a higher-priority type.
    pub fn outranks(&self, other: &Association) -> bool {
        match self.strength.partial_cmp(&other.strength) {
            Some(std::cmp::Ordering::Greater) => true,
            Some(std::cmp::Ordering::Less) => false,
            _ => self.kind.priority() > other.kind.priority(),
        }
    }
}

/// Outcome of writing an edge into the association graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeUpdate {
    Inserted(Association),
    Updated {
        previous: Association,
        current: Association,
    },
    /// Self-loops and other no-op writes.
    Ignored,
}
