//! Repository addressing types
//!
//! A caller addresses the workspace host with a [`RepositorySelector`];
//! the host answers with a [`RepositoryHandle`] that all subsequent
//! fetches must present. Handles are opaque to the query layer and are
//! passed through unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies a repository by location name and repository name.
///
/// Supplied by the caller; both fields are expected to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositorySelector {
    pub location_name: String,
    pub repository_name: String,
}

impl RepositorySelector {
    pub fn new(location_name: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            location_name: location_name.into(),
            repository_name: repository_name.into(),
        }
    }
}

/// Opaque reference to a located repository, minted by the host.
///
/// `origin_id` identifies the host load generation that minted the
/// handle; a host may reject handles minted by a different generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryHandle {
    pub location_name: String,
    pub repository_name: String,
    pub origin_id: Uuid,
}

impl RepositoryHandle {
    pub fn new(
        location_name: impl Into<String>,
        repository_name: impl Into<String>,
        origin_id: Uuid,
    ) -> Self {
        Self {
            location_name: location_name.into(),
            repository_name: repository_name.into(),
            origin_id,
        }
    }
}

/// One partition set as described by the host.
///
/// The query layer never constructs these from scratch; it only
/// filters, sorts, and wraps what the host returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionSetSnapshot {
    pub name: String,
    pub pipeline_name: String,
    pub mode: String,
}

impl PartitionSetSnapshot {
    pub fn new(
        name: impl Into<String>,
        pipeline_name: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pipeline_name: pipeline_name.into(),
            mode: mode.into(),
        }
    }

    /// Sort key for catalog listings: (pipeline_name, mode, name).
    pub fn sort_key(&self) -> (&str, &str, &str) {
        (&self.pipeline_name, &self.mode, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_construction() {
        let selector = RepositorySelector::new("local", "analytics");
        assert_eq!(selector.location_name, "local");
        assert_eq!(selector.repository_name, "analytics");
    }

    #[test]
    fn test_sort_key_ordering() {
        let a = PartitionSetSnapshot::new("daily", "ingest", "default");
        let b = PartitionSetSnapshot::new("daily", "ingest", "staging");
        let c = PartitionSetSnapshot::new("daily", "rollup", "default");

        assert!(a.sort_key() < b.sort_key());
        assert!(b.sort_key() < c.sort_key());
    }
}
