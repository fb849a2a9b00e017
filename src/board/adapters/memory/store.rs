//! In-memory state store for tests and ephemeral boards.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, RwLock};

use crate::board::ports::{StateKey, StateStore, StateStoreError, StateStoreResult};

/// Thread-safe in-memory state store.
///
/// Clones share the same underlying entries, so a clone held by a test can
/// observe what the board service persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    entries: Arc<RwLock<HashMap<StateKey, String>>>,
}

impl InMemoryStateStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self, key: StateKey) -> StateStoreResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|err| StateStoreError::read(key, io::Error::other(err.to_string())))?;
        Ok(entries.get(&key).cloned())
    }

    fn save(&self, key: StateKey, payload: &str) -> StateStoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| StateStoreError::write(key, io::Error::other(err.to_string())))?;
        entries.insert(key, payload.to_owned());
        Ok(())
    }
}
