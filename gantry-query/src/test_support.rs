//! In-crate stub host for resolver unit tests.

use async_trait::async_trait;
use gantry_core::{
    FetchOutcome, PartitionSetSnapshot, RepositoryHandle, RepositorySelector, RunConfig, Tag,
};
use uuid::Uuid;

use crate::host::{HostError, HostResult, WorkspaceHost};

pub(crate) struct StubHost {
    pub partition_sets: Vec<PartitionSetSnapshot>,
    pub names: FetchOutcome<Vec<String>>,
    pub config: FetchOutcome<RunConfig>,
    pub tags: FetchOutcome<Vec<Tag>>,
    pub resolve_error: Option<HostError>,
}

impl Default for StubHost {
    fn default() -> Self {
        Self {
            partition_sets: vec![],
            names: FetchOutcome::Data(vec![]),
            config: FetchOutcome::Data(RunConfig::Null),
            tags: FetchOutcome::Data(vec![]),
            resolve_error: None,
        }
    }
}

impl StubHost {
    pub fn with_partition_sets(sets: Vec<PartitionSetSnapshot>) -> Self {
        Self {
            partition_sets: sets,
            ..Self::default()
        }
    }
}

pub(crate) fn selector() -> RepositorySelector {
    RepositorySelector::new("local", "analytics")
}

pub(crate) fn handle() -> RepositoryHandle {
    RepositoryHandle::new("local", "analytics", Uuid::nil())
}

#[async_trait]
impl WorkspaceHost for StubHost {
    async fn resolve_repository(
        &self,
        selector: &RepositorySelector,
    ) -> HostResult<RepositoryHandle> {
        if let Some(err) = &self.resolve_error {
            return Err(err.clone());
        }
        Ok(RepositoryHandle::new(
            selector.location_name.clone(),
            selector.repository_name.clone(),
            Uuid::nil(),
        ))
    }

    async fn list_partition_sets(
        &self,
        _handle: &RepositoryHandle,
    ) -> HostResult<Vec<PartitionSetSnapshot>> {
        Ok(self.partition_sets.clone())
    }

    async fn fetch_partition_names(
        &self,
        _handle: &RepositoryHandle,
        _partition_set_name: &str,
    ) -> HostResult<FetchOutcome<Vec<String>>> {
        Ok(self.names.clone())
    }

    async fn fetch_partition_config(
        &self,
        _handle: &RepositoryHandle,
        _partition_set_name: &str,
        _partition_name: &str,
    ) -> HostResult<FetchOutcome<RunConfig>> {
        Ok(self.config.clone())
    }

    async fn fetch_partition_tags(
        &self,
        _handle: &RepositoryHandle,
        _partition_set_name: &str,
        _partition_name: &str,
    ) -> HostResult<FetchOutcome<Vec<Tag>>> {
        Ok(self.tags.clone())
    }
}
