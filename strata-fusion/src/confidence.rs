//! Overall confidence of a fused context.

/// Rank-weighted mean of `scores` (weight `1/(rank+1)`, rank from 0),
/// multiplied by the sparse-evidence factor `p + (1 - p)·n/window` when fewer
/// than `window` scores are present. Empty input has confidence 0.
pub fn confidence(scores: &[f64], window: usize, sparse_penalty: f64) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let (weighted, norm) = scores
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sum, norm), (rank, s)| {
            let w = 1.0 / (rank as f64 + 1.0);
            (sum + w * s.clamp(0.0, 1.0), norm + w)
        });
    let mean = weighted / norm;
    (mean * sparse_multiplier(scores.len(), window, sparse_penalty)).clamp(0.0, 1.0)
}

/// `1` when `n ≥ window`, else interpolates from `p` (nothing found) to 1.
pub fn sparse_multiplier(n: usize, window: usize, sparse_penalty: f64) -> f64 {
    if window == 0 || n >= window {
        return 1.0;
    }
    let p = sparse_penalty.clamp(0.0, 1.0);
    p + (1.0 - p) * n as f64 / window as f64
}
