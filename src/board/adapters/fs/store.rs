//! JSON-file state store over a capability-scoped directory.

use std::io;

use cap_std::fs::Dir;

use crate::board::ports::{StateKey, StateStore, StateStoreError, StateStoreResult};

/// State store keeping one JSON file per key inside a directory.
///
/// The directory handle is a capability: the store can read and write the
/// files inside it and nothing else. Writes replace the whole file; there
/// is no write-ahead log and no atomicity across keys, matching the
/// documented best-effort persistence contract.
#[derive(Debug)]
pub struct JsonFileStateStore {
    dir: Dir,
}

impl JsonFileStateStore {
    /// Creates a store over the given directory capability.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Returns the file name holding the given key.
    const fn file_name(key: StateKey) -> &'static str {
        match key {
            StateKey::Todos => "todos.json",
            StateKey::TeamMembers => "teamMembers.json",
        }
    }
}

impl StateStore for JsonFileStateStore {
    fn load(&self, key: StateKey) -> StateStoreResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StateStoreError::read(key, err)),
        }
    }

    fn save(&self, key: StateKey, payload: &str) -> StateStoreResult<()> {
        self.dir
            .write(Self::file_name(key), payload)
            .map_err(|err| StateStoreError::write(key, err))
    }
}
