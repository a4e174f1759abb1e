use crate::errors::StrataResult;
use crate::models::EngineSnapshot;

/// External persistence collaborator. The engine itself is in-memory only.
pub trait ISnapshotStore: Send + Sync {
    fn save(&self, snapshot: &EngineSnapshot) -> StrataResult<()>;

    /// The most recently saved snapshot, if any.
    fn load(&self) -> StrataResult<Option<EngineSnapshot>>;
}
