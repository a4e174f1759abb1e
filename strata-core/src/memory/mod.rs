pub mod content;
pub mod node;
pub mod node_id;
pub mod tier_kind;
pub mod weight;

pub use content::{
    ConceptRelation, EmotionalContent, EpisodicContent, NodeContent, ProceduralContent,
    ProcedureStep, SemanticContent, WorkingContent,
};
pub use node::MemoryNode;
pub use node_id::NodeId;
pub use tier_kind::TierKind;
pub use weight::Weight;
