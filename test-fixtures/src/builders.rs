use chrono::{DateTime, TimeZone, Utc};
use strata_core::memory::*;

/// A fixed instant so time-dependent tests are reproducible.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn working_content(text: &str) -> NodeContent {
    NodeContent::Working(WorkingContent {
        text: text.to_string(),
        attention_score: 1.0,
    })
}

/// The event record used by the end-to-end complaint scenario.
pub fn complaint_event() -> EpisodicContent {
    EpisodicContent {
        summary: String::new(),
        location: Some("support_system".into()),
        participants: Vec::new(),
        actions: vec!["receive_complaint".into(), "resolve".into()],
        results: vec!["customer_satisfied".into()],
    }
}

pub fn episodic_content(
    summary: &str,
    location: Option<&str>,
    participants: &[&str],
    actions: &[&str],
    results: &[&str],
) -> NodeContent {
    NodeContent::Episodic(EpisodicContent {
        summary: summary.to_string(),
        location: location.map(str::to_string),
        participants: participants.iter().map(|s| s.to_string()).collect(),
        actions: actions.iter().map(|s| s.to_string()).collect(),
        results: results.iter().map(|s| s.to_string()).collect(),
    })
}

pub fn semantic_content(concept: &str, statement: &str) -> NodeContent {
    NodeContent::Semantic(SemanticContent {
        concept_id: concept.to_string(),
        statement: statement.to_string(),
        relations: Vec::new(),
    })
}

pub fn procedural_content(trigger: &str, steps: &[&str]) -> NodeContent {
    NodeContent::Procedural(ProceduralContent {
        name: String::new(),
        trigger_pattern: trigger.to_string(),
        steps: steps.iter().map(|s| ProcedureStep::new(*s)).collect(),
        success_rate: 0.5,
        executions: 0,
    })
}

pub fn emotional_content(
    label: &str,
    valence: f64,
    arousal: f64,
    outcome: Option<NodeId>,
) -> NodeContent {
    NodeContent::Emotional(EmotionalContent {
        label: label.to_string(),
        valence,
        arousal,
        associated_outcome: outcome,
    })
}

/// Build a node from content at `now`.
///
/// # Panics
/// Panics if the content cannot be hashed.
pub fn node(content: NodeContent, weight: f64, now: DateTime<Utc>) -> MemoryNode {
    MemoryNode::new(content, weight, now).expect("fixture content must serialize")
}

pub fn working_node(text: &str, weight: f64, now: DateTime<Utc>) -> MemoryNode {
    node(working_content(text), weight, now)
}
