//! Snapshot-backed implementation of the workspace host capability
//!
//! Handles minted by a `SnapshotHost` carry the host's load-generation
//! id; a handle minted by a different generation (a reloaded snapshot)
//! is rejected as stale rather than answered from unrelated data.

use async_trait::async_trait;
use gantry_core::{
    ExecutionFailure, FetchOutcome, PartitionSetSnapshot, RepositoryHandle, RepositorySelector,
    RunConfig, Tag,
};
use gantry_query::host::{HostError, HostResult, WorkspaceHost};
use tracing::debug;
use uuid::Uuid;

use crate::snapshot::{PartitionSetRecord, RepositorySnapshot, WorkspaceSnapshot};

/// Serves partition queries from an immutable [`WorkspaceSnapshot`].
pub struct SnapshotHost {
    snapshot: WorkspaceSnapshot,
    origin_id: Uuid,
}

impl SnapshotHost {
    pub fn new(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            snapshot,
            origin_id: Uuid::new_v4(),
        }
    }

    /// The load-generation id stamped into every handle this host mints.
    pub fn origin_id(&self) -> Uuid {
        self.origin_id
    }

    fn repository(&self, handle: &RepositoryHandle) -> HostResult<&RepositorySnapshot> {
        if handle.origin_id != self.origin_id {
            return Err(HostError::StaleHandle {
                location: handle.location_name.clone(),
                repository: handle.repository_name.clone(),
            });
        }
        let location = self
            .snapshot
            .location(&handle.location_name)
            .ok_or_else(|| HostError::LocationNotFound(handle.location_name.clone()))?;
        location
            .repository(&handle.repository_name)
            .ok_or_else(|| HostError::RepositoryNotFound {
                location: handle.location_name.clone(),
                repository: handle.repository_name.clone(),
            })
    }

    fn partition_set<'a>(
        &'a self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
    ) -> HostResult<&'a PartitionSetRecord> {
        self.repository(handle)?
            .partition_set(partition_set_name)
            .ok_or_else(|| HostError::UnknownPartitionSet(partition_set_name.to_string()))
    }

    /// Fetch one partition's payload from a set record.
    ///
    /// A set with a captured error answers every fetch with that
    /// failure; an unknown partition name inside a known set is also a
    /// user-code-level failure, not a host error.
    fn fetch_from_set<T>(
        set: &PartitionSetRecord,
        partition_name: &str,
        extract: impl FnOnce(&crate::snapshot::PartitionRecord) -> T,
    ) -> FetchOutcome<T> {
        if let Some(message) = &set.error {
            return FetchOutcome::Failed(ExecutionFailure::new(message.clone()));
        }
        match set.partition(partition_name) {
            Some(record) => FetchOutcome::Data(extract(record)),
            None => FetchOutcome::Failed(ExecutionFailure::new(format!(
                "Partition \"{}\" not found in partition set \"{}\"",
                partition_name, set.name
            ))),
        }
    }
}

#[async_trait]
impl WorkspaceHost for SnapshotHost {
    async fn resolve_repository(
        &self,
        selector: &RepositorySelector,
    ) -> HostResult<RepositoryHandle> {
        let location = self
            .snapshot
            .location(&selector.location_name)
            .ok_or_else(|| HostError::LocationNotFound(selector.location_name.clone()))?;
        location
            .repository(&selector.repository_name)
            .ok_or_else(|| HostError::RepositoryNotFound {
                location: selector.location_name.clone(),
                repository: selector.repository_name.clone(),
            })?;

        debug!(
            location = %selector.location_name,
            repository = %selector.repository_name,
            "Resolved repository"
        );
        Ok(RepositoryHandle::new(
            selector.location_name.clone(),
            selector.repository_name.clone(),
            self.origin_id,
        ))
    }

    async fn list_partition_sets(
        &self,
        handle: &RepositoryHandle,
    ) -> HostResult<Vec<PartitionSetSnapshot>> {
        Ok(self
            .repository(handle)?
            .partition_sets
            .iter()
            .map(|set| set.as_snapshot())
            .collect())
    }

    async fn fetch_partition_names(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
    ) -> HostResult<FetchOutcome<Vec<String>>> {
        let set = self.partition_set(handle, partition_set_name)?;
        if let Some(message) = &set.error {
            return Ok(FetchOutcome::Failed(ExecutionFailure::new(message.clone())));
        }
        Ok(FetchOutcome::Data(
            set.partitions.iter().map(|p| p.name.clone()).collect(),
        ))
    }

    async fn fetch_partition_config(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> HostResult<FetchOutcome<RunConfig>> {
        let set = self.partition_set(handle, partition_set_name)?;
        Ok(Self::fetch_from_set(set, partition_name, |record| {
            record.run_config.clone()
        }))
    }

    async fn fetch_partition_tags(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> HostResult<FetchOutcome<Vec<Tag>>> {
        let set = self.partition_set(handle, partition_set_name)?;
        Ok(Self::fetch_from_set(set, partition_name, |record| {
            record.tags.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKSPACE: &str = r#"
locations:
  - name: local
    repositories:
      - name: analytics
        partition_sets:
          - name: daily
            pipeline_name: ingest
            partitions:
              - name: "2024-01-01"
                tags:
                  - key: team
                    value: infra
              - name: "2024-01-02"
          - name: broken
            pipeline_name: ingest
            error: "boom"
"#;

    fn host() -> SnapshotHost {
        SnapshotHost::new(WorkspaceSnapshot::from_yaml_str(WORKSPACE).unwrap())
    }

    fn selector() -> RepositorySelector {
        RepositorySelector::new("local", "analytics")
    }

    #[tokio::test]
    async fn test_resolve_and_list() {
        let host = host();
        let handle = host.resolve_repository(&selector()).await.unwrap();
        assert_eq!(handle.origin_id, host.origin_id());

        let sets = host.list_partition_sets(&handle).await.unwrap();
        let names: Vec<_> = sets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["daily", "broken"]);
    }

    #[tokio::test]
    async fn test_unknown_location_and_repository() {
        let host = host();
        let err = host
            .resolve_repository(&RepositorySelector::new("nowhere", "analytics"))
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::LocationNotFound(_)));

        let err = host
            .resolve_repository(&RepositorySelector::new("local", "nothing"))
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::RepositoryNotFound { .. }));
    }

    #[tokio::test]
    async fn test_stale_handle_rejected() {
        let first = host();
        let second = host();
        let handle = first.resolve_repository(&selector()).await.unwrap();

        let err = second.list_partition_sets(&handle).await.unwrap_err();
        assert!(matches!(err, HostError::StaleHandle { .. }));
    }

    #[tokio::test]
    async fn test_names_in_snapshot_order() {
        let host = host();
        let handle = host.resolve_repository(&selector()).await.unwrap();

        let names = host
            .fetch_partition_names(&handle, "daily")
            .await
            .unwrap()
            .into_result()
            .unwrap();
        assert_eq!(names, ["2024-01-01", "2024-01-02"]);
    }

    #[tokio::test]
    async fn test_captured_error_fails_every_fetch() {
        let host = host();
        let handle = host.resolve_repository(&selector()).await.unwrap();

        let names = host.fetch_partition_names(&handle, "broken").await.unwrap();
        let config = host
            .fetch_partition_config(&handle, "broken", "2024-01-01")
            .await
            .unwrap();
        let tags = host
            .fetch_partition_tags(&handle, "broken", "2024-01-01")
            .await
            .unwrap();

        for failure in [
            names.into_result().unwrap_err(),
            config.into_result().unwrap_err(),
            tags.into_result().unwrap_err(),
        ] {
            assert_eq!(failure.message, "boom");
        }
    }

    #[tokio::test]
    async fn test_unknown_partition_is_fetch_failure_not_host_error() {
        let host = host();
        let handle = host.resolve_repository(&selector()).await.unwrap();

        let outcome = host
            .fetch_partition_config(&handle, "daily", "2099-01-01")
            .await
            .unwrap();
        let failure = outcome.into_result().unwrap_err();
        assert!(failure.message.contains("2099-01-01"));
    }

    #[tokio::test]
    async fn test_unknown_partition_set_is_host_error() {
        let host = host();
        let handle = host.resolve_repository(&selector()).await.unwrap();

        let err = host
            .fetch_partition_names(&handle, "no-such-set")
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::UnknownPartitionSet(ref name) if name == "no-such-set"));
    }
}
