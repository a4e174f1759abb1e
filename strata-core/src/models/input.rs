use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StrataError;
use crate::memory::TierKind;

/// Classification hint supplied with every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Event,
    Knowledge,
    Skill,
    Emotion,
    Query,
}

impl InputType {
    pub const ALL: [InputType; 6] = [
        Self::Text,
        Self::Event,
        Self::Knowledge,
        Self::Skill,
        Self::Emotion,
        Self::Query,
    ];

    /// The tier written during encoding. Queries are read-only.
    pub fn target_tier(self) -> Option<TierKind> {
        match self {
            Self::Text => Some(TierKind::Working),
            Self::Event => Some(TierKind::Episodic),
            Self::Knowledge => Some(TierKind::Semantic),
            Self::Skill => Some(TierKind::Procedural),
            Self::Emotion => Some(TierKind::Emotional),
            Self::Query => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Event => "event",
            Self::Knowledge => "knowledge",
            Self::Skill => "skill",
            Self::Emotion => "emotion",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| StrataError::malformed(format!("unrecognized input type '{s}'")))
    }
}

/// Parsed input event as handed over by the request router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Text(String),
    Structured(serde_json::Value),
}

impl RawInput {
    /// Every string leaf of the payload, in document order.
    pub fn text_fragments(&self) -> Vec<&str> {
        fn walk<'a>(value: &'a serde_json::Value, out: &mut Vec<&'a str>) {
            match value {
                serde_json::Value::String(s) => out.push(s.as_str()),
                serde_json::Value::Array(items) => items.iter().for_each(|v| walk(v, out)),
                serde_json::Value::Object(map) => map.values().for_each(|v| walk(v, out)),
                _ => {}
            }
        }
        match self {
            Self::Text(s) => vec![s.as_str()],
            Self::Structured(v) => {
                let mut out = Vec::new();
                walk(v, &mut out);
                out
            }
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text_fragments().iter().all(|s| s.trim().is_empty())
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<serde_json::Value> for RawInput {
    fn from(v: serde_json::Value) -> Self {
        Self::Structured(v)
    }
}
