//! # Gantry Query
//!
//! The query-resolution layer for partition metadata. Resolvers answer
//! four kinds of questions against a [`host::WorkspaceHost`]:
//!
//! - what partition sets exist for a pipeline? ([`catalog::PartitionSetCatalog`])
//! - what is partition set X? ([`PartitionSetCatalog::find`](catalog::PartitionSetCatalog::find))
//! - what partitions does a set have, optionally paginated? ([`partitions::PartitionLister`])
//! - what run config / tags does a specific partition carry? ([`details::PartitionDetails`])
//!
//! Resolvers hold no state beyond a host reference; every call is an
//! independent read-only resolution chain.

pub mod catalog;
pub mod details;
pub mod host;
pub mod pagination;
pub mod partitions;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{PartitionSet, PartitionSetCatalog};
pub use details::{PartitionDetails, PartitionRunConfig};
pub use host::{HostError, WorkspaceHost};
pub use pagination::{apply_page_window, PageWindow};
pub use partitions::{Partition, PartitionLister};

use gantry_core::ExecutionFailure;

/// Result type for query resolution.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Caller-facing error taxonomy.
///
/// The three shapes a caller must be able to distinguish: a named
/// lookup that found nothing, a user-code failure captured by the host
/// (message preserved verbatim), and an infrastructure failure in the
/// host itself.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Partition set not found: {name}")]
    PartitionSetNotFound { name: String },

    #[error(transparent)]
    Execution(#[from] ExecutionFailure),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("Failed to render run config: {0}")]
    ConfigRender(#[from] serde_yaml::Error),
}
