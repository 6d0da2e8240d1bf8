//! # Gantry Core
//!
//! Shared domain vocabulary for the Gantry partition-metadata layer:
//! repository selectors and handles, partition-set snapshots, tags and
//! tag classification, and the outcome type every partition-data fetch
//! returns. Pure data, no I/O.

pub mod fetch;
pub mod repository;
pub mod tags;

// Re-export commonly used types
pub use fetch::{ExecutionFailure, FetchOutcome};
pub use repository::{PartitionSetSnapshot, RepositoryHandle, RepositorySelector};
pub use tags::{get_tag_type, Tag, TagType, HIDDEN_TAG_PREFIX, SYSTEM_TAG_PREFIX};

/// Run configuration for one partition, as captured from user code.
///
/// Kept as a JSON-shaped value; rendering to YAML text happens at the
/// query layer. `serde_json` map keys sort lexicographically, so any
/// rendered form has a stable key order.
pub type RunConfig = serde_json::Value;
