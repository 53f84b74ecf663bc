//! CLI command implementations.

pub mod week;
