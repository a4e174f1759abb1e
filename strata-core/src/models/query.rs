use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::memory::NodeId;
use crate::text;

/// What the read path asks every tier for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalQuery {
    /// Raw query text, used verbatim by pattern-matching tiers.
    pub text: String,
    /// Normalized tokens of `text`.
    pub tokens: BTreeSet<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Nodes that must not be returned, such as the one written by the same pass.
    #[serde(default)]
    pub exclude: BTreeSet<NodeId>,
}

impl RetrievalQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = text::token_set([text.as_str()]);
        Self {
            text,
            tokens,
            participants: Vec::new(),
            location: None,
            exclude: BTreeSet::new(),
        }
    }

    pub fn with_participants(mut self, participants: Vec<String>) -> Self {
        self.participants = participants;
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn excluding(mut self, id: NodeId) -> Self {
        self.exclude.insert(id);
        self
    }

    pub fn excludes(&self, id: &NodeId) -> bool {
        self.exclude.contains(id)
    }

    /// A query carries no signal if it has neither tokens nor episodic cues.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.participants.is_empty() && self.location.is_none()
    }
}
