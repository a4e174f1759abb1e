use serde::{Deserialize, Serialize};
use std::fmt;

/// Phases of one perception–memory pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    #[default]
    Idle,
    Encoding,
    Retrieving,
    Expanding,
    Fusing,
    Responding,
}

impl LoopState {
    /// The state that follows this one in a normal pass.
    pub fn next(self) -> LoopState {
        match self {
            Self::Idle => Self::Encoding,
            Self::Encoding => Self::Retrieving,
            Self::Retrieving => Self::Expanding,
            Self::Expanding => Self::Fusing,
            Self::Fusing => Self::Responding,
            Self::Responding => Self::Idle,
        }
    }

    /// States at whose entry a pass checks for cancellation.
    pub fn is_cancellation_point(self) -> bool {
        matches!(
            self,
            Self::Encoding | Self::Retrieving | Self::Expanding | Self::Fusing
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Encoding => "encoding",
            Self::Retrieving => "retrieving",
            Self::Expanding => "expanding",
            Self::Fusing => "fusing",
            Self::Responding => "responding",
        }
    }
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
