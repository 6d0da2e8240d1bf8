//! Workspace host capability
//!
//! The orchestration host owns repository definitions and answers fetch
//! requests for partition data. Resolvers receive it as an explicit
//! `&dyn WorkspaceHost` parameter; there is no ambient context.
//!
//! Host errors are infrastructure failures (unknown location, stale
//! handle, transport). User-code failures never appear here: they
//! travel inside [`FetchOutcome`], so a fetch that reached user code
//! and failed still returns `Ok`.

use async_trait::async_trait;
use gantry_core::{
    FetchOutcome, PartitionSetSnapshot, RepositoryHandle, RepositorySelector, RunConfig, Tag,
};

/// Result type for host operations.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Infrastructure failures from the workspace host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Repository location not found: {0}")]
    LocationNotFound(String),

    #[error("Repository not found: {repository} in location {location}")]
    RepositoryNotFound {
        location: String,
        repository: String,
    },

    #[error("Unknown partition set: {0}")]
    UnknownPartitionSet(String),

    #[error("Stale repository handle for {repository} in location {location}")]
    StaleHandle {
        location: String,
        repository: String,
    },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Read-only access to repository and partition data.
///
/// Calls may suspend (the host may be network- or IPC-bound); this
/// layer imposes no timeout or retry policy of its own.
#[async_trait]
pub trait WorkspaceHost: Send + Sync {
    /// Locate a repository and mint a handle for subsequent fetches.
    async fn resolve_repository(
        &self,
        selector: &RepositorySelector,
    ) -> HostResult<RepositoryHandle>;

    /// All partition sets defined in the repository, in host order.
    async fn list_partition_sets(
        &self,
        handle: &RepositoryHandle,
    ) -> HostResult<Vec<PartitionSetSnapshot>>;

    /// The full ordered partition-name list for a partition set.
    async fn fetch_partition_names(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
    ) -> HostResult<FetchOutcome<Vec<String>>>;

    /// The run configuration for one partition.
    async fn fetch_partition_config(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> HostResult<FetchOutcome<RunConfig>>;

    /// The ordered tag sequence for one partition.
    async fn fetch_partition_tags(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> HostResult<FetchOutcome<Vec<Tag>>>;
}
