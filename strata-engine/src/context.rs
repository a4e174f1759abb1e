//! Per-request context supplied alongside an input.

use serde_json::{Map, Value};

use strata_core::constants::MAX_TOP_K;
use strata_core::errors::{StrataError, StrataResult};

/// Recognised context keys. Anything else in the map is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessContext {
    /// Initial weight for the encoded node, overriding the tier default.
    pub weight: Option<f64>,
    /// Per-tier retrieval limit for this pass.
    pub top_k: Option<usize>,
    pub participants: Vec<String>,
    pub location: Option<String>,
}

impl ProcessContext {
    pub fn parse(map: &Map<String, Value>) -> StrataResult<Self> {
        let weight = match map.get("weight") {
            None | Some(Value::Null) => None,
            Some(v) => match v.as_f64() {
                Some(w) if w.is_finite() && w >= 0.0 => Some(w),
                _ => {
                    return Err(StrataError::malformed(format!(
                        "context.weight must be a non-negative number, got {v}"
                    )))
                }
            },
        };

        let top_k = match map.get("top_k") {
            None | Some(Value::Null) => None,
            Some(v) => match v.as_u64() {
                Some(k) if k > 0 => Some(usize::try_from(k).unwrap_or(MAX_TOP_K).min(MAX_TOP_K)),
                _ => {
                    return Err(StrataError::malformed(format!(
                        "context.top_k must be a positive integer, got {v}"
                    )))
                }
            },
        };

        let participants = match map.get("participants") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        StrataError::malformed("context.participants must contain only strings")
                    })
                })
                .collect::<StrataResult<Vec<_>>>()?,
            Some(v) => {
                return Err(StrataError::malformed(format!(
                    "context.participants must be a string or a list of strings, got {v}"
                )))
            }
        };

        let location = match map.get("location") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()).filter(|s| !s.trim().is_empty()),
            Some(v) => {
                return Err(StrataError::malformed(format!(
                    "context.location must be a string, got {v}"
                )))
            }
        };

        Ok(Self {
            weight,
            top_k,
            participants,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_map_is_default() {
        assert_eq!(ProcessContext::parse(&Map::new()).unwrap(), ProcessContext::default());
    }

    #[test]
    fn reads_known_keys() {
        let ctx = ProcessContext::parse(&map(json!({
            "weight": 0.4,
            "top_k": 3,
            "participants": ["alice", "bob"],
            "location": "lab",
            "unrelated": true
        })))
        .unwrap();
        assert_eq!(ctx.weight, Some(0.4));
        assert_eq!(ctx.top_k, Some(3));
        assert_eq!(ctx.participants, vec!["alice", "bob"]);
        assert_eq!(ctx.location.as_deref(), Some("lab"));
    }

    #[test]
    fn top_k_is_capped() {
        let ctx = ProcessContext::parse(&map(json!({ "top_k": 100_000 }))).unwrap();
        assert_eq!(ctx.top_k, Some(MAX_TOP_K));
    }

    #[test]
    fn rejects_bad_values() {
        for bad in [
            json!({ "weight": -1.0 }),
            json!({ "weight": "heavy" }),
            json!({ "top_k": 0 }),
            json!({ "participants": [1, 2] }),
            json!({ "location": 7 }),
        ] {
            let err = ProcessContext::parse(&map(bad.clone())).unwrap_err();
            assert!(
                matches!(err, StrataError::MalformedInput { .. }),
                "{bad} should be malformed"
            );
        }
    }
}
