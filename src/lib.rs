//! Taskboard: the data-service core of a collaborative to-do board.
//!
//! This crate owns the canonical collections of tasks and team members,
//! exposes total (no-throw) mutation operations with referential-integrity
//! maintenance, derived read queries (filtering, sorting, statistics), and
//! best-effort persistence to a durable key-value medium.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (files, memory)
//! - **Services**: The board service orchestrating state and persistence
//!
//! # Modules
//!
//! - [`board`]: Task and team-member state management

pub mod board;
