//! Tier-specific rendering of a node into a context fragment.
//!
//! Episodes read as a short narrative, facts as a list, procedures as an
//! ordered step list and emotions as valence/arousal annotations. Raw field
//! values are kept verbatim so callers can match on them.

use strata_core::memory::{
    EmotionalContent, EpisodicContent, NodeContent, ProceduralContent, SemanticContent,
    TierKind, WorkingContent,
};
use strata_core::models::FusedSection;

/// Render one node's content.
pub fn render(content: &NodeContent) -> String {
    match content {
        NodeContent::Working(c) => working(c),
        NodeContent::Episodic(c) => episodic(c),
        NodeContent::Semantic(c) => semantic(c),
        NodeContent::Procedural(c) => procedural(c),
        NodeContent::Emotional(c) => emotional(c),
    }
}

/// Join sections into one text, grouped by tier in tier order and by rank
/// within a tier.
pub fn join(sections: &[FusedSection]) -> String {
    let mut groups = Vec::new();
    for tier in TierKind::ALL {
        let lines: Vec<&str> = sections
            .iter()
            .filter(|s| s.tier == tier)
            .map(|s| s.rendered.as_str())
            .collect();
        if !lines.is_empty() {
            groups.push(format!("[{tier}]\n{}", lines.join("\n")));
        }
    }
    groups.join("\n\n")
}

fn working(c: &WorkingContent) -> String {
    format!("- focus: {}", c.text.trim())
}

fn episodic(c: &EpisodicContent) -> String {
    let mut parts = Vec::new();
    if !c.summary.trim().is_empty() {
        parts.push(c.summary.trim().to_string());
    }
    if let Some(location) = c.location.as_deref().filter(|l| !l.trim().is_empty()) {
        parts.push(format!("at {location}"));
    }
    if !c.participants.is_empty() {
        parts.push(format!("with {}", c.participants.join(", ")));
    }
    if !c.actions.is_empty() {
        parts.push(format!("did {}", c.actions.join(" then ")));
    }
    if !c.results.is_empty() {
        parts.push(format!("resulting in {}", c.results.join(", ")));
    }
    if parts.is_empty() {
        return "- an unrecorded event".to_string();
    }
    format!("- {}.", parts.join(", "))
}

fn semantic(c: &SemanticContent) -> String {
    let mut line = format!("- {}", c.concept_id);
    if !c.statement.trim().is_empty() {
        line.push_str(": ");
        line.push_str(c.statement.trim());
    }
    if !c.relations.is_empty() {
        let rels: Vec<String> = c
            .relations
            .iter()
            .map(|r| format!("{} {}", r.relation, r.target_concept))
            .collect();
        line.push_str(&format!(" ({})", rels.join("; ")));
    }
    line
}

fn procedural(c: &ProceduralContent) -> String {
    let title = if c.name.trim().is_empty() {
        c.trigger_pattern.as_str()
    } else {
        c.name.as_str()
    };
    let mut out = format!(
        "- procedure {title} (when {}, success {:.0}%):",
        c.trigger_pattern,
        c.success_rate.clamp(0.0, 1.0) * 100.0
    );
    for (i, step) in c.steps.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, step.operation));
        if let Some(detail) = &step.detail {
            out.push_str(&format!(" ({detail})"));
        }
    }
    out
}

fn emotional(c: &EmotionalContent) -> String {
    format!(
        "- feeling {} (valence {:+.2}, arousal {:.2})",
        c.label, c.valence, c.arousal
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::memory::ProcedureStep;

    #[test]
    fn episode_keeps_raw_fields() {
        let text = episodic(&EpisodicContent {
            summary: String::new(),
            location: Some("support_system".into()),
            participants: vec![],
            actions: vec!["receive_complaint".into(), "resolve".into()],
            results: vec!["customer_satisfied".into()],
        });
        assert_eq!(
            text,
            "- at support_system, did receive_complaint then resolve, resulting in customer_satisfied."
        );
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let text = procedural(&ProceduralContent {
            name: "refund".into(),
            trigger_pattern: "refund".into(),
            steps: vec![ProcedureStep::new("verify"), ProcedureStep::new("pay")],
            success_rate: 0.5,
            executions: 0,
        });
        assert!(text.contains("1. verify\n  2. pay"));
        assert!(text.contains("success 50%"));
    }

    #[test]
    fn emotion_shows_signed_valence() {
        let text = emotional(&EmotionalContent {
            label: "relief".into(),
            valence: 0.5,
            arousal: 0.25,
            associated_outcome: None,
        });
        assert_eq!(text, "- feeling relief (valence +0.50, arousal 0.25)");
    }
}
