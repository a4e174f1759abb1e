//! In-process snapshot storage.

use std::sync::RwLock;

use strata_core::errors::{StrataError, StrataResult};
use strata_core::models::EngineSnapshot;
use strata_core::traits::ISnapshotStore;

/// Keeps the latest snapshot as serialized JSON, so a save/load cycle
/// exercises the same encoding an on-disk store would.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    latest: RwLock<Option<String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON of the latest snapshot.
    pub fn raw(&self) -> StrataResult<Option<String>> {
        let guard = self
            .latest
            .read()
            .map_err(|e| StrataError::ConcurrencyError(e.to_string()))?;
        Ok(guard.clone())
    }
}

impl ISnapshotStore for InMemorySnapshotStore {
    fn save(&self, snapshot: &EngineSnapshot) -> StrataResult<()> {
        let json = snapshot.to_json()?;
        let mut guard = self
            .latest
            .write()
            .map_err(|e| StrataError::ConcurrencyError(e.to_string()))?;
        *guard = Some(json);
        Ok(())
    }

    fn load(&self) -> StrataResult<Option<EngineSnapshot>> {
        match self.raw()? {
            Some(json) => Ok(Some(EngineSnapshot::from_json(&json)?)),
            None => Ok(None),
        }
    }
}
