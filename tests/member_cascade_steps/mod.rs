//! Step modules for member deletion cascade scenarios.

pub mod world;

mod given;
mod then;
mod when;
