//! # Gantry Workspace
//!
//! A concrete workspace host backed by an immutable snapshot: a YAML
//! document describing locations, repositories, partition sets, and
//! their partitions, served through the
//! [`gantry_query::WorkspaceHost`] capability.
//!
//! A partition set may carry a captured error instead of partition
//! data; every partition-data fetch for such a set answers with the
//! failure the snapshot recorded.

pub mod host;
pub mod snapshot;

pub use host::SnapshotHost;
pub use snapshot::{
    LocationSnapshot, PartitionRecord, PartitionSetRecord, RepositorySnapshot, WorkspaceSnapshot,
};

/// Result type for snapshot loading.
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Errors raised while loading or validating a workspace snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read workspace file {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse workspace YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Empty name for {scope}")]
    EmptyName { scope: String },

    #[error("Duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("Duplicate repository {repository} in location {location}")]
    DuplicateRepository {
        location: String,
        repository: String,
    },

    #[error("Duplicate partition set {name} in repository {repository}")]
    DuplicatePartitionSet { repository: String, name: String },

    #[error("Duplicate partition {name} in partition set {partition_set}")]
    DuplicatePartition { partition_set: String, name: String },
}
