//! CLI command implementations

pub mod detail;
pub mod partitions;
pub mod sets;
