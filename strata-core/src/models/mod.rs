mod association;
mod decay_report;
mod degradation_event;
mod fused_context;
mod input;
mod loop_state;
mod query;
mod reasoning_result;
mod scored_node;
mod snapshot;
mod status;

pub use association::{Association, AssociationType, EdgeUpdate};
pub use decay_report::DecayReport;
pub use degradation_event::DegradationEvent;
pub use fused_context::{FusedContext, FusedSection};
pub use input::{InputType, RawInput};
pub use loop_state::LoopState;
pub use query::RetrievalQuery;
pub use reasoning_result::{ActivatedMemory, ActivationSource, ReasoningResult};
pub use scored_node::ScoredNode;
pub use snapshot::{EdgeRecord, EngineSnapshot};
pub use status::{MemoryStatus, ProcessingStats, TierStatus};
