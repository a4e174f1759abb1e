use serde::{Deserialize, Serialize};

use super::node_id::NodeId;
use super::tier_kind::TierKind;

/// Working memory: a short-lived focus item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingContent {
    pub text: String,
    /// Recency/relevance proxy used only inside the working tier, in `[0, 1]`.
    #[serde(default = "default_attention")]
    pub attention_score: f64,
}

fn default_attention() -> f64 {
    1.0
}

/// Episodic memory: a complete event record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpisodicContent {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Ordered actor ids.
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub results: Vec<String>,
}

/// A typed edge from one concept to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptRelation {
    pub relation: String,
    pub target_concept: String,
}

/// Semantic memory: an abstracted fact about a concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticContent {
    pub concept_id: String,
    #[serde(default)]
    pub statement: String,
    #[serde(default)]
    pub relations: Vec<ConceptRelation>,
}

/// One operation in a procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureStep {
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProcedureStep {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            detail: None,
        }
    }
}

/// Procedural memory: a skill triggered by a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProceduralContent {
    #[serde(default)]
    pub name: String,
    /// Regular expression (case-insensitive) or plain keywords.
    pub trigger_pattern: String,
    pub steps: Vec<ProcedureStep>,
    /// Running average in `[0, 1]`.
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
    /// Outcomes folded into `success_rate`.
    #[serde(default)]
    pub executions: u64,
}

fn default_success_rate() -> f64 {
    0.5
}

impl ProceduralContent {
    /// Fold one execution outcome into the running success average.
    pub fn record_outcome(&mut self, success: bool) {
        let outcome = if success { 1.0 } else { 0.0 };
        self.executions += 1;
        let n = self.executions as f64;
        self.success_rate = (self.success_rate * (n - 1.0) + outcome) / n;
        self.success_rate = self.success_rate.clamp(0.0, 1.0);
    }
}

/// Emotional memory: an affective tag attached to an outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalContent {
    pub label: String,
    /// Signed pleasantness, conventionally in `[-1, 1]`.
    pub valence: f64,
    /// Intensity, conventionally in `[0, 1]`.
    pub arousal: f64,
    /// The event or result that produced this affect, when known.
    #[serde(default)]
    pub associated_outcome: Option<NodeId>,
}

impl EmotionalContent {
    /// How strongly this affect should colour recall, in `[0, 1]`.
    pub fn salience(&self) -> f64 {
        (self.valence.abs().min(1.0) * 0.5 + self.arousal.clamp(0.0, 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Typed content wrapper. Each tier has its own content struct.
/// Serialized as a tagged enum so the owning tier is preserved in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum NodeContent {
    Working(WorkingContent),
    Episodic(EpisodicContent),
    Semantic(SemanticContent),
    Procedural(ProceduralContent),
    Emotional(EmotionalContent),
}

impl NodeContent {
    /// The tier whose shape this content has.
    pub fn tier(&self) -> TierKind {
        match self {
            Self::Working(_) => TierKind::Working,
            Self::Episodic(_) => TierKind::Episodic,
            Self::Semantic(_) => TierKind::Semantic,
            Self::Procedural(_) => TierKind::Procedural,
            Self::Emotional(_) => TierKind::Emotional,
        }
    }

    /// Every free-text fragment of the payload, used for lexical matching.
    pub fn text_fragments(&self) -> Vec<&str> {
        match self {
            Self::Working(c) => vec![c.text.as_str()],
            Self::Episodic(c) => {
                let mut out = vec![c.summary.as_str()];
                if let Some(loc) = &c.location {
                    out.push(loc.as_str());
                }
                out.extend(c.participants.iter().map(String::as_str));
                out.extend(c.actions.iter().map(String::as_str));
                out.extend(c.results.iter().map(String::as_str));
                out
            }
            Self::Semantic(c) => {
                let mut out = vec![c.concept_id.as_str(), c.statement.as_str()];
                for r in &c.relations {
                    out.push(r.relation.as_str());
                    out.push(r.target_concept.as_str());
                }
                out
            }
            Self::Procedural(c) => {
                let mut out = vec![c.name.as_str(), c.trigger_pattern.as_str()];
                for s in &c.steps {
                    out.push(s.operation.as_str());
                    if let Some(d) = &s.detail {
                        out.push(d.as_str());
                    }
                }
                out
            }
            Self::Emotional(c) => vec![c.label.as_str()],
        }
    }

    /// A one-line human summary.
    pub fn headline(&self) -> String {
        match self {
            Self::Working(c) => c.text.clone(),
            Self::Episodic(c) if !c.summary.is_empty() => c.summary.clone(),
            Self::Episodic(c) => c.actions.join(", "),
            Self::Semantic(c) => format!("{}: {}", c.concept_id, c.statement),
            Self::Procedural(c) if !c.name.is_empty() => c.name.clone(),
            Self::Procedural(c) => c.trigger_pattern.clone(),
            Self::Emotional(c) => c.label.clone(),
        }
    }

    /// Reshape this content for another tier, if a sensible mapping exists.
    ///
    /// Only upward promotions are defined: working focus items become event
    /// records, and events can be abstracted into a fact keyed by location.
    pub fn promote_to(&self, target: TierKind) -> Option<NodeContent> {
        match (self, target) {
            (Self::Working(c), TierKind::Episodic) => Some(Self::Episodic(EpisodicContent {
                summary: c.text.clone(),
                ..EpisodicContent::default()
            })),
            (Self::Episodic(c), TierKind::Semantic) => {
                let concept = c.location.clone().filter(|l| !l.is_empty())?;
                Some(Self::Semantic(SemanticContent {
                    concept_id: concept,
                    statement: self.headline(),
                    relations: Vec::new(),
                }))
            }
            _ => None,
        }
    }
}
