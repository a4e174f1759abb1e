//! Turns a raw input into tier content plus the retrieval query for its pass.
//!
//! Every input type except `query` produces exactly one node. Validation
//! happens here, before any tier is touched, so a malformed input never
//! leaves a partial write behind.

use serde::Deserialize;
use serde_json::Value;

use strata_core::errors::{StrataError, StrataResult};
use strata_core::memory::content::{
    EmotionalContent, EpisodicContent, ProceduralContent, ProcedureStep, SemanticContent,
    WorkingContent,
};
use strata_core::models::{InputType, RawInput, RetrievalQuery};
use strata_core::NodeContent;

use crate::context::ProcessContext;

/// Separates trigger from steps in the text form of a skill.
const SKILL_ARROW: &str = "=>";
/// Separates steps in the text form of a skill.
const STEP_SEPARATOR: char = ';';

/// The validated outcome of encoding one input.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// `None` for queries.
    pub content: Option<NodeContent>,
    pub weight: Option<f64>,
    pub top_k: Option<usize>,
    pub query: RetrievalQuery,
}

pub fn encode(
    input: &RawInput,
    input_type: InputType,
    context: ProcessContext,
) -> StrataResult<Encoded> {
    if input.is_blank() {
        return Err(StrataError::malformed(format!("empty {input_type} input")));
    }

    let content = match input_type {
        InputType::Query => None,
        InputType::Text => Some(NodeContent::Working(working(input)?)),
        InputType::Event => Some(NodeContent::Episodic(event(input, &context)?)),
        InputType::Knowledge => Some(NodeContent::Semantic(knowledge(input)?)),
        InputType::Skill => Some(NodeContent::Procedural(skill(input)?)),
        InputType::Emotion => Some(NodeContent::Emotional(emotion(input)?)),
    };

    let text = match &content {
        Some(c) => c.text_fragments().join(" "),
        None => query_text(input),
    };
    let (participants, location) = match &content {
        Some(NodeContent::Episodic(e)) => (e.participants.clone(), e.location.clone()),
        _ => (context.participants, context.location),
    };
    let query = RetrievalQuery::new(text)
        .with_participants(participants)
        .with_location(location);

    Ok(Encoded {
        content,
        weight: context.weight,
        top_k: context.top_k,
        query,
    })
}

fn structured<T: for<'de> Deserialize<'de>>(value: &Value, what: &str) -> StrataResult<T> {
    serde_json::from_value(value.clone())
        .map_err(|e| StrataError::malformed(format!("invalid {what} payload: {e}")))
}

fn working(input: &RawInput) -> StrataResult<WorkingContent> {
    let mut content = match input {
        RawInput::Text(s) => WorkingContent {
            text: s.trim().to_string(),
            attention_score: 1.0,
        },
        RawInput::Structured(v) => structured::<WorkingContent>(v, "text")?,
    };
    if content.text.trim().is_empty() {
        return Err(StrataError::malformed("text input has no text"));
    }
    if !content.attention_score.is_finite() {
        return Err(StrataError::malformed("attention_score must be a finite number"));
    }
    content.attention_score = content.attention_score.clamp(0.0, 1.0);
    Ok(content)
}

fn event(input: &RawInput, context: &ProcessContext) -> StrataResult<EpisodicContent> {
    let mut content = match input {
        RawInput::Text(s) => EpisodicContent {
            summary: s.trim().to_string(),
            ..EpisodicContent::default()
        },
        RawInput::Structured(v) => structured::<EpisodicContent>(v, "event")?,
    };
    if content.participants.is_empty() {
        content.participants = context.participants.clone();
    }
    if content.location.as_deref().map_or(true, |l| l.trim().is_empty()) {
        content.location = context.location.clone();
    }

    let has_body = !content.summary.trim().is_empty()
        || content.location.is_some()
        || content.actions.iter().any(|a| !a.trim().is_empty())
        || content.results.iter().any(|r| !r.trim().is_empty());
    if !has_body {
        return Err(StrataError::malformed(
            "event needs a summary, location, action or result",
        ));
    }
    Ok(content)
}

fn knowledge(input: &RawInput) -> StrataResult<SemanticContent> {
    let content = match input {
        RawInput::Text(s) => {
            let Some((concept, statement)) = s.split_once(':') else {
                return Err(StrataError::malformed(
                    "knowledge text must look like 'concept: statement'",
                ));
            };
            SemanticContent {
                concept_id: concept.trim().to_string(),
                statement: statement.trim().to_string(),
                relations: Vec::new(),
            }
        }
        RawInput::Structured(v) => structured::<SemanticContent>(v, "knowledge")?,
    };
    if content.concept_id.trim().is_empty() {
        return Err(StrataError::malformed("knowledge needs a concept_id"));
    }
    Ok(content)
}

/// Skill payload as accepted on the wire: steps may be plain strings.
#[derive(Deserialize)]
struct SkillPayload {
    #[serde(default)]
    name: String,
    #[serde(default, alias = "trigger")]
    trigger_pattern: String,
    #[serde(default)]
    steps: Vec<StepPayload>,
    #[serde(default)]
    success_rate: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StepPayload {
    Plain(String),
    Full(ProcedureStep),
}

impl From<StepPayload> for ProcedureStep {
    fn from(step: StepPayload) -> Self {
        match step {
            StepPayload::Plain(op) => ProcedureStep::new(op.trim()),
            StepPayload::Full(step) => step,
        }
    }
}

fn skill(input: &RawInput) -> StrataResult<ProceduralContent> {
    let payload = match input {
        RawInput::Text(s) => {
            let Some((trigger, steps)) = s.split_once(SKILL_ARROW) else {
                return Err(StrataError::malformed(
                    "skill text must look like 'trigger => step; step'",
                ));
            };
            SkillPayload {
                name: String::new(),
                trigger_pattern: trigger.trim().to_string(),
                steps: steps
                    .split(STEP_SEPARATOR)
                    .map(|s| StepPayload::Plain(s.to_string()))
                    .collect(),
                success_rate: None,
            }
        }
        RawInput::Structured(v) => structured::<SkillPayload>(v, "skill")?,
    };

    if payload.trigger_pattern.trim().is_empty() {
        return Err(StrataError::malformed("skill needs a trigger pattern"));
    }
    let steps: Vec<ProcedureStep> = payload
        .steps
        .into_iter()
        .map(ProcedureStep::from)
        .filter(|s| !s.operation.trim().is_empty())
        .collect();
    if steps.is_empty() {
        return Err(StrataError::malformed("skill needs at least one step"));
    }
    let success_rate = match payload.success_rate {
        None => 0.5,
        Some(r) if (0.0..=1.0).contains(&r) => r,
        Some(r) => {
            return Err(StrataError::malformed(format!(
                "success_rate must be in [0, 1], got {r}"
            )))
        }
    };

    Ok(ProceduralContent {
        name: payload.name.trim().to_string(),
        trigger_pattern: payload.trigger_pattern.trim().to_string(),
        steps,
        success_rate,
        executions: 0,
    })
}

fn emotion(input: &RawInput) -> StrataResult<EmotionalContent> {
    let RawInput::Structured(v) = input else {
        return Err(StrataError::malformed(
            "emotion input must be structured with label, valence and arousal",
        ));
    };
    let content: EmotionalContent = structured(v, "emotion")?;
    if content.label.trim().is_empty() {
        return Err(StrataError::malformed("emotion needs a label"));
    }
    if !(content.valence.is_finite() && (-1.0..=1.0).contains(&content.valence)) {
        return Err(StrataError::malformed(format!(
            "valence must be in [-1, 1], got {}",
            content.valence
        )));
    }
    if !(content.arousal.is_finite() && (0.0..=1.0).contains(&content.arousal)) {
        return Err(StrataError::malformed(format!(
            "arousal must be in [0, 1], got {}",
            content.arousal
        )));
    }
    Ok(content)
}

/// Query text: a plain string, a `text` or `query` field, or every string
/// leaf of the payload.
fn query_text(input: &RawInput) -> String {
    if let RawInput::Structured(v) = input {
        for key in ["text", "query"] {
            if let Some(s) = v.get(key).and_then(Value::as_str) {
                return s.trim().to_string();
            }
        }
    }
    input.text_fragments().join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn enc(input: RawInput, t: InputType) -> StrataResult<Encoded> {
        encode(&input, t, ProcessContext::default())
    }

    fn is_malformed(r: StrataResult<Encoded>) -> bool {
        matches!(r, Err(StrataError::MalformedInput { .. }))
    }

    // ── Shorthands ────────────────────────────────────────────────────────

    #[test]
    fn knowledge_text_splits_on_colon() {
        let e = enc("rust: a systems language".into(), InputType::Knowledge).unwrap();
        let Some(NodeContent::Semantic(c)) = e.content else {
            panic!("expected semantic content");
        };
        assert_eq!(c.concept_id, "rust");
        assert_eq!(c.statement, "a systems language");
    }

    #[test]
    fn skill_text_splits_trigger_and_steps() {
        let e = enc("deploy => build; test ; ship;".into(), InputType::Skill).unwrap();
        let Some(NodeContent::Procedural(c)) = e.content else {
            panic!("expected procedural content");
        };
        assert_eq!(c.trigger_pattern, "deploy");
        let ops: Vec<_> = c.steps.iter().map(|s| s.operation.as_str()).collect();
        assert_eq!(ops, vec!["build", "test", "ship"]);
    }

    #[test]
    fn structured_skill_accepts_plain_and_full_steps() {
        let input = json!({
            "trigger": "refund",
            "steps": ["verify order", { "operation": "issue refund", "detail": "card" }]
        });
        let e = enc(input.into(), InputType::Skill).unwrap();
        let Some(NodeContent::Procedural(c)) = e.content else {
            panic!("expected procedural content");
        };
        assert_eq!(c.steps.len(), 2);
        assert_eq!(c.steps[1].detail.as_deref(), Some("card"));
    }

    #[test]
    fn event_inherits_context_cues() {
        let ctx = ProcessContext {
            participants: vec!["alice".into()],
            location: Some("checkout".into()),
            ..ProcessContext::default()
        };
        let e = encode(&"payment failed".into(), InputType::Event, ctx).unwrap();
        let Some(NodeContent::Episodic(c)) = &e.content else {
            panic!("expected episodic content");
        };
        assert_eq!(c.participants, vec!["alice"]);
        assert_eq!(c.location.as_deref(), Some("checkout"));
        assert_eq!(e.query.location.as_deref(), Some("checkout"));
    }

    #[test]
    fn query_produces_no_content() {
        let e = enc(json!({ "text": "failed payment", "extra": "ignored" }).into(), InputType::Query)
            .unwrap();
        assert!(e.content.is_none());
        assert_eq!(e.query.text, "failed payment");
    }

    // ── Rejections ────────────────────────────────────────────────────────

    #[test]
    fn blank_input_is_malformed() {
        assert!(is_malformed(enc("   ".into(), InputType::Text)));
        assert!(is_malformed(enc(json!({}).into(), InputType::Query)));
    }

    #[test]
    fn emotion_must_be_structured_and_in_range() {
        assert!(is_malformed(enc("so happy".into(), InputType::Emotion)));
        let out_of_range = json!({ "label": "joy", "valence": 3.0, "arousal": 0.5 });
        assert!(is_malformed(enc(out_of_range.into(), InputType::Emotion)));
        let ok = json!({ "label": "joy", "valence": 0.8, "arousal": 0.5 });
        assert!(enc(ok.into(), InputType::Emotion).is_ok());
    }

    #[test]
    fn incomplete_payloads_are_malformed() {
        assert!(is_malformed(enc("no arrow here".into(), InputType::Skill)));
        assert!(is_malformed(enc("deploy =>  ; ".into(), InputType::Skill)));
        assert!(is_malformed(enc("no colon".into(), InputType::Knowledge)));
        assert!(is_malformed(enc(json!({ "unknown": "field" }).into(), InputType::Event)));
        assert!(is_malformed(enc(json!({ "statement": "x" }).into(), InputType::Knowledge)));
    }
}
