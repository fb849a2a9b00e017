//! Key-value persistence port for board state.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for state store operations.
pub type StateStoreResult<T> = Result<T, StateStoreError>;

/// Keys under which the board collections are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// The serialized task collection.
    Todos,
    /// The serialized team-member collection.
    TeamMembers,
}

impl StateKey {
    /// Returns the canonical key string in the persistence medium.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todos => "todos",
            Self::TeamMembers => "teamMembers",
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value persistence contract.
///
/// Payloads are opaque serialized strings; the store neither inspects nor
/// validates them. Implementations must tolerate loads of keys that were
/// never saved by returning `Ok(None)`.
pub trait StateStore: Send + Sync {
    /// Loads the payload stored under the given key.
    ///
    /// Returns `None` when the key has never been saved.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError::Read`] when the medium cannot be read.
    fn load(&self, key: StateKey) -> StateStoreResult<Option<String>>;

    /// Saves a payload under the given key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError::Write`] when the medium cannot be
    /// written.
    fn save(&self, key: StateKey, payload: &str) -> StateStoreResult<()>;
}

/// Errors returned by state store implementations.
#[derive(Debug, Clone, Error)]
pub enum StateStoreError {
    /// The medium could not be read.
    #[error("failed to read key '{key}': {source}")]
    Read {
        /// The key being loaded.
        key: StateKey,
        /// The underlying medium failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The medium could not be written.
    #[error("failed to write key '{key}': {source}")]
    Write {
        /// The key being saved.
        key: StateKey,
        /// The underlying medium failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl StateStoreError {
    /// Wraps a read failure for the given key.
    pub fn read(key: StateKey, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read {
            key,
            source: Arc::new(err),
        }
    }

    /// Wraps a write failure for the given key.
    pub fn write(key: StateKey, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write {
            key,
            source: Arc::new(err),
        }
    }
}
