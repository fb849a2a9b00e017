//! Filesystem adapter implementations.
//!
//! Persistence goes through a capability-scoped [`cap_std::fs::Dir`], so an
//! adapter can only ever touch the directory it was handed.

mod store;

pub use store::JsonFileStateStore;
