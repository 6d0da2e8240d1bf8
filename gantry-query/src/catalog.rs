//! Partition-set catalog
//!
//! Lists and looks up partition sets for a repository. Listings are
//! always sorted ascending by (pipeline_name, mode, name), regardless
//! of the order the host returns them in.

use gantry_core::{PartitionSetSnapshot, RepositoryHandle, RepositorySelector};
use tracing::debug;

use crate::host::WorkspaceHost;
use crate::partitions::Partition;
use crate::{QueryError, Result};

/// A partition set paired with the handle of its owning repository.
///
/// Wraps what the host returned; this layer never builds a snapshot of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSet {
    handle: RepositoryHandle,
    snapshot: PartitionSetSnapshot,
}

impl PartitionSet {
    pub fn new(handle: RepositoryHandle, snapshot: PartitionSetSnapshot) -> Self {
        Self { handle, snapshot }
    }

    pub fn name(&self) -> &str {
        &self.snapshot.name
    }

    pub fn pipeline_name(&self) -> &str {
        &self.snapshot.pipeline_name
    }

    pub fn mode(&self) -> &str {
        &self.snapshot.mode
    }

    pub fn repository(&self) -> &RepositoryHandle {
        &self.handle
    }

    pub fn snapshot(&self) -> &PartitionSetSnapshot {
        &self.snapshot
    }

    /// Construct a view of one member partition. See [`Partition::new`]
    /// for the non-empty-name contract.
    pub fn partition(&self, partition_name: &str) -> Partition {
        Partition::new(self.handle.clone(), self.snapshot.clone(), partition_name)
    }
}

/// Catalog of partition sets for a repository.
pub struct PartitionSetCatalog<'a> {
    host: &'a dyn WorkspaceHost,
}

impl<'a> PartitionSetCatalog<'a> {
    pub fn new(host: &'a dyn WorkspaceHost) -> Self {
        Self { host }
    }

    /// All partition sets whose pipeline matches `pipeline_name`,
    /// sorted ascending by (pipeline_name, mode, name).
    ///
    /// An empty filtered list is an empty `Vec`, not an error; the only
    /// error path is repository resolution.
    pub async fn for_pipeline(
        &self,
        selector: &RepositorySelector,
        pipeline_name: &str,
    ) -> Result<Vec<PartitionSet>> {
        let handle = self.host.resolve_repository(selector).await?;
        let mut snapshots: Vec<_> = self
            .host
            .list_partition_sets(&handle)
            .await?
            .into_iter()
            .filter(|snapshot| snapshot.pipeline_name == pipeline_name)
            .collect();
        snapshots.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        debug!(
            location = %selector.location_name,
            repository = %selector.repository_name,
            pipeline = %pipeline_name,
            count = snapshots.len(),
            "Listed partition sets"
        );

        Ok(snapshots
            .into_iter()
            .map(|snapshot| PartitionSet::new(handle.clone(), snapshot))
            .collect())
    }

    /// Look up one partition set by exact name.
    ///
    /// No match is a first-class result:
    /// [`QueryError::PartitionSetNotFound`] carrying the queried name.
    pub async fn find(
        &self,
        selector: &RepositorySelector,
        partition_set_name: &str,
    ) -> Result<PartitionSet> {
        let handle = self.host.resolve_repository(selector).await?;
        let snapshots = self.host.list_partition_sets(&handle).await?;

        snapshots
            .into_iter()
            .find(|snapshot| snapshot.name == partition_set_name)
            .map(|snapshot| PartitionSet::new(handle.clone(), snapshot))
            .ok_or_else(|| QueryError::PartitionSetNotFound {
                name: partition_set_name.to_string(),
            })
    }
}
