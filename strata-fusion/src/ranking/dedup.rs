//! One entry per node id.

use std::collections::HashMap;

use strata_core::memory::NodeId;

use super::RankedCandidate;

/// Keep the highest-scoring entry for each node. On equal scores a direct
/// retrieval beats an expansion, then the earlier entry wins.
pub fn deduplicate(ranked: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
    let mut best: HashMap<NodeId, usize> = HashMap::with_capacity(ranked.len());
    let mut out: Vec<RankedCandidate> = Vec::with_capacity(ranked.len());

    for entry in ranked {
        match best.get(&entry.candidate.id()) {
            Some(&slot) => {
                if replaces(&entry, &out[slot]) {
                    out[slot] = entry;
                }
            }
            None => {
                best.insert(entry.candidate.id(), out.len());
                out.push(entry);
            }
        }
    }
    out
}

fn replaces(new: &RankedCandidate, kept: &RankedCandidate) -> bool {
    if new.score != kept.score {
        return new.score > kept.score;
    }
    new.candidate.is_retrieved() && !kept.candidate.is_retrieved()
}
