//! Lexical helpers shared by tier scorers and association comparators.
//!
//! Everything here is deterministic: tokens come out lowercased, in input
//! order, and set operations use `BTreeSet` so iteration order is stable.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").ok());

/// Tokens shorter than this are dropped.
const MIN_TOKEN_LEN: usize = 2;

/// Shared prefix length at which two distinct tokens count as related
/// ("resolve" / "resolution").
const STEM_PREFIX_LEN: usize = 4;

/// Affinity of two tokens that only share a stem.
const STEM_AFFINITY: f64 = 0.5;

const STOPWORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "as", "at", "be", "by", "did", "do", "does", "for", "from",
    "had", "has", "have", "how", "in", "into", "is", "it", "its", "me", "my", "of", "on", "or",
    "our", "so", "that", "the", "their", "then", "there", "this", "to", "was", "we", "were",
    "what", "when", "where", "which", "who", "why", "with", "you", "your",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Split text into lowercase word tokens, dropping stopwords and one-letter tokens.
/// Underscores and punctuation separate tokens, so `receive_complaint` yields
/// `receive` and `complaint`.
pub fn tokenize(text: &str) -> Vec<String> {
    let Some(re) = TOKEN.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN && !is_stopword(t))
        .collect()
}

/// Distinct tokens of several fragments.
pub fn token_set<'a, I>(fragments: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments.into_iter().flat_map(tokenize).collect()
}

/// How related two tokens are: 1.0 if equal, 0.5 if they share a stem, else 0.
pub fn token_affinity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let shared = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();
    if shared >= STEM_PREFIX_LEN {
        STEM_AFFINITY
    } else {
        0.0
    }
}

/// Fraction of `query` tokens found in `doc`, with stem matches counting half.
/// Returns 0 for an empty query.
pub fn query_coverage(query: &BTreeSet<String>, doc: &BTreeSet<String>) -> f64 {
    if query.is_empty() || doc.is_empty() {
        return 0.0;
    }
    let total: f64 = query
        .iter()
        .map(|q| {
            if doc.contains(q) {
                1.0
            } else {
                doc.iter()
                    .map(|d| token_affinity(q, d))
                    .fold(0.0, f64::max)
            }
        })
        .sum();
    (total / query.len() as f64).clamp(0.0, 1.0)
}

/// Order-independent soft overlap: the mean of coverage in both directions.
pub fn soft_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    (query_coverage(a, b) + query_coverage(b, a)) / 2.0
}

/// Plain Jaccard index of two sets. Two empty sets have similarity 0.
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Case-insensitive, whitespace-trimmed equality.
pub fn same_label(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    !a.is_empty() && a.eq_ignore_ascii_case(b)
}
