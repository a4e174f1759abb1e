use std::collections::BTreeSet;

use strata_core::text::*;

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn tokenize_splits_snake_case_and_drops_stopwords() {
    assert_eq!(
        tokenize("The customer filed a receive_complaint!"),
        vec!["customer", "filed", "receive", "complaint"]
    );
}

#[test]
fn tokenize_lowercases_unicode() {
    assert_eq!(tokenize("Café ÜBER"), vec!["café", "über"]);
}

#[test]
fn coverage_counts_stems_half() {
    let query = set(&["complaint", "resolution"]);
    let doc = set(&["receive", "complaint", "resolve"]);
    assert!((query_coverage(&query, &doc) - 0.75).abs() < 1e-12);
    assert_eq!(query_coverage(&BTreeSet::new(), &doc), 0.0);
}

#[test]
fn soft_similarity_is_symmetric() {
    let a = set(&["disk", "full", "alert"]);
    let b = set(&["disk", "cleanup", "alerting"]);
    assert_eq!(soft_similarity(&a, &b), soft_similarity(&b, &a));
}

#[test]
fn jaccard_of_empty_sets_is_zero() {
    let empty: BTreeSet<String> = BTreeSet::new();
    assert_eq!(jaccard(&empty, &empty), 0.0);
    assert!((jaccard(&set(&["a1", "b2"]), &set(&["b2", "c3"])) - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn same_label_ignores_case_and_blank() {
    assert!(same_label(" Frustration", "frustration "));
    assert!(!same_label("", ""));
}
