use std::fmt;

use serde::{Deserialize, Serialize};

/// The five memory tiers. A node belongs to exactly one of them at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    Working,
    Episodic,
    Semantic,
    Procedural,
    Emotional,
}

impl TierKind {
    /// Total number of tiers.
    pub const COUNT: usize = 5;

    /// All variants, in storage order.
    pub const ALL: [TierKind; 5] = [
        Self::Working,
        Self::Episodic,
        Self::Semantic,
        Self::Procedural,
        Self::Emotional,
    ];

    /// Stable slot index used by engines that keep tiers in an array.
    pub fn index(self) -> usize {
        match self {
            Self::Working => 0,
            Self::Episodic => 1,
            Self::Semantic => 2,
            Self::Procedural => 3,
            Self::Emotional => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Episodic => "episodic",
            Self::Semantic => "semantic",
            Self::Procedural => "procedural",
            Self::Emotional => "emotional",
        }
    }

    /// Event-like tiers record things that happened at a point in time.
    /// Temporal co-occurrence is only meaningful between these.
    pub fn is_event_like(self) -> bool {
        matches!(self, Self::Working | Self::Episodic | Self::Emotional)
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
