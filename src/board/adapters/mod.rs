//! Adapter implementations of the board persistence port.

pub mod fs;
pub mod memory;
