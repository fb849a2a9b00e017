//! Task and team-member state management.
//!
//! This module implements the board's single bounded context: creating,
//! updating, and deleting tasks and team members, keeping task assignments
//! referentially consistent when members leave, deriving filtered and
//! sorted display views, and mirroring the collections to a key-value
//! persistence medium after every mutation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
