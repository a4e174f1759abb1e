mod association_comparator;
mod decay_curve;
mod memory_tier;
mod promotion_policy;
mod relevance_scorer;
mod snapshot_store;

pub use association_comparator::IAssociationComparator;
pub use decay_curve::IDecayCurve;
pub use memory_tier::IMemoryTier;
pub use promotion_policy::IPromotionPolicy;
pub use relevance_scorer::IRelevanceScorer;
pub use snapshot_store::ISnapshotStore;
