//! # strata-association
//!
//! Cross-tier and intra-tier relationships between memory nodes.
//! Comparators score node pairs, the detector picks the winning typed
//! association, and an undirected `petgraph` graph stores edges whose strength
//! is smoothed with an exponential moving average on re-detection.

pub mod detector;
pub mod engine;
pub mod graph;
pub mod strategies;
pub mod traversal;

pub use detector::{AssociationDetector, DetectionBreakdown};
pub use engine::AssociationEngine;
pub use graph::{GraphManager, PruneResult};
pub use traversal::Neighbor;
