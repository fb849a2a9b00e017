//! Port contracts for board persistence.

mod state_store;

pub use state_store::{StateKey, StateStore, StateStoreError, StateStoreResult};
