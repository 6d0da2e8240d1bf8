//! Scriptable workspace host
//!
//! `MockHost` answers each host method from per-call programmed
//! results and records every call it receives. Unscripted fetches
//! panic with a clear message so a test failure points at the missing
//! script rather than a confusing downstream assertion.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gantry_core::{
    FetchOutcome, PartitionSetSnapshot, RepositoryHandle, RepositorySelector, RunConfig, Tag,
};
use gantry_query::host::{HostError, HostResult, WorkspaceHost};
use uuid::Uuid;

/// A workspace host with programmed responses and call recording.
pub struct MockHost {
    origin_id: Uuid,
    partition_sets: Vec<PartitionSetSnapshot>,
    names: HashMap<String, FetchOutcome<Vec<String>>>,
    configs: HashMap<(String, String), FetchOutcome<RunConfig>>,
    tags: HashMap<(String, String), FetchOutcome<Vec<Tag>>>,
    resolve_error: Option<HostError>,
    calls: Mutex<Vec<String>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            origin_id: Uuid::new_v4(),
            partition_sets: vec![],
            names: HashMap::new(),
            configs: HashMap::new(),
            tags: HashMap::new(),
            resolve_error: None,
            calls: Mutex::new(vec![]),
        }
    }

    /// Add a partition set to the repository listing.
    pub fn with_partition_set(mut self, snapshot: PartitionSetSnapshot) -> Self {
        self.partition_sets.push(snapshot);
        self
    }

    /// Script the name listing for a partition set.
    pub fn with_names(mut self, set_name: &str, outcome: FetchOutcome<Vec<String>>) -> Self {
        self.names.insert(set_name.to_string(), outcome);
        self
    }

    /// Script the run config for one partition.
    pub fn with_config(
        mut self,
        set_name: &str,
        partition_name: &str,
        outcome: FetchOutcome<RunConfig>,
    ) -> Self {
        self.configs
            .insert((set_name.to_string(), partition_name.to_string()), outcome);
        self
    }

    /// Script the tag listing for one partition.
    pub fn with_tags(
        mut self,
        set_name: &str,
        partition_name: &str,
        outcome: FetchOutcome<Vec<Tag>>,
    ) -> Self {
        self.tags
            .insert((set_name.to_string(), partition_name.to_string()), outcome);
        self
    }

    /// Make repository resolution fail.
    pub fn with_resolve_error(mut self, error: HostError) -> Self {
        self.resolve_error = Some(error);
        self
    }

    /// Every call received so far, in order.
    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl WorkspaceHost for MockHost {
    async fn resolve_repository(
        &self,
        selector: &RepositorySelector,
    ) -> HostResult<RepositoryHandle> {
        self.record(format!(
            "resolve_repository({}/{})",
            selector.location_name, selector.repository_name
        ));
        if let Some(error) = &self.resolve_error {
            return Err(error.clone());
        }
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
        self.record(format!("list_partition_sets({})", handle.repository_name));
        Ok(self.partition_sets.clone())
    }

    async fn fetch_partition_names(
        &self,
        _handle: &RepositoryHandle,
        partition_set_name: &str,
    ) -> HostResult<FetchOutcome<Vec<String>>> {
        self.record(format!("fetch_partition_names({partition_set_name})"));
        Ok(self
            .names
            .get(partition_set_name)
            .unwrap_or_else(|| {
                panic!("MockHost: no scripted names for partition set '{partition_set_name}'")
            })
            .clone())
    }

    async fn fetch_partition_config(
        &self,
        _handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> HostResult<FetchOutcome<RunConfig>> {
        self.record(format!(
            "fetch_partition_config({partition_set_name}, {partition_name})"
        ));
        let key = (partition_set_name.to_string(), partition_name.to_string());
        Ok(self
            .configs
            .get(&key)
            .unwrap_or_else(|| {
                panic!("MockHost: no scripted config for '{partition_set_name}/{partition_name}'")
            })
            .clone())
    }

    async fn fetch_partition_tags(
        &self,
        _handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> HostResult<FetchOutcome<Vec<Tag>>> {
        self.record(format!(
            "fetch_partition_tags({partition_set_name}, {partition_name})"
        ));
        let key = (partition_set_name.to_string(), partition_name.to_string());
        Ok(self
            .tags
            .get(&key)
            .unwrap_or_else(|| {
                panic!("MockHost: no scripted tags for '{partition_set_name}/{partition_name}'")
            })
            .clone())
    }
}
