use chrono::{DateTime, Utc};
use moka::sync::Cache;
use regex::{Regex, RegexBuilder};
use strata_core::memory::{MemoryNode, NodeContent};
use strata_core::models::RetrievalQuery;
use strata_core::text;
use strata_core::traits::IRelevanceScorer;

use super::node_tokens;

/// Compiled-size cap for user-supplied trigger patterns.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compiled patterns kept when no tier capacity is known.
const DEFAULT_PATTERN_CACHE: u64 = 256;

/// Trigger-pattern match, weighted by the skill's success rate.
///
/// Triggers are tried as case-insensitive regular expressions; a trigger that
/// does not compile is treated as plain keywords. Compiled patterns live in a
/// bounded cache sized to the tier, so triggers of evicted skills age out.
pub struct ProceduralScorer {
    compiled: Cache<String, Option<Regex>>,
}

impl ProceduralScorer {
    pub fn new(max_patterns: u64) -> Self {
        Self {
            compiled: Cache::new(max_patterns.max(1)),
        }
    }

    /// Number of compiled patterns currently cached.
    pub fn cached_patterns(&self) -> u64 {
        self.compiled.run_pending_tasks();
        self.compiled.entry_count()
    }

    fn pattern(&self, trigger: &str) -> Option<Regex> {
        self.compiled.get_with(trigger.to_string(), || {
            RegexBuilder::new(trigger)
                .case_insensitive(true)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()
                .ok()
        })
    }

    fn trigger_match(&self, trigger: &str, query: &RetrievalQuery) -> f64 {
        if trigger.trim().is_empty() {
            return 0.0;
        }
        match self.pattern(trigger) {
            Some(re) if re.is_match(&query.text) => 1.0,
            Some(_) => 0.0,
            None => text::query_coverage(&text::token_set([trigger]), &query.tokens),
        }
    }
}

impl Default for ProceduralScorer {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN_CACHE)
    }
}

impl std::fmt::Debug for ProceduralScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProceduralScorer")
            .field("cached_patterns", &self.compiled.entry_count())
            .finish()
    }
}

impl IRelevanceScorer for ProceduralScorer {
    fn score(&self, node: &MemoryNode, query: &RetrievalQuery, _now: DateTime<Utc>) -> f64 {
        let NodeContent::Procedural(skill) = &node.content else {
            return 0.0;
        };
        let trigger = self.trigger_match(&skill.trigger_pattern, query);
        // A skill can still be found by what it does, at half strength.
        let body = 0.5 * text::query_coverage(&query.tokens, &node_tokens(node));
        let base = trigger.max(body);
        let reliability = 0.75 + 0.25 * skill.success_rate.clamp(0.0, 1.0);
        (base * reliability).clamp(0.0, 1.0)
    }
}
