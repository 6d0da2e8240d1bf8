//! Fluent builders for workspace snapshots
//!
//! Builders construct snapshot records programmatically where reading
//! a YAML fixture would obscure what a test actually varies.

use gantry_core::{RunConfig, Tag};
use gantry_workspace::{
    LocationSnapshot, PartitionRecord, PartitionSetRecord, RepositorySnapshot, SnapshotHost,
    WorkspaceSnapshot,
};

/// Builder for a [`WorkspaceSnapshot`].
///
/// Repositories attach to the most recently added location, partition
/// sets to the most recently added repository.
pub struct SnapshotBuilder {
    locations: Vec<LocationSnapshot>,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self { locations: vec![] }
    }

    /// Start a new location.
    pub fn location(mut self, name: &str) -> Self {
        self.locations.push(LocationSnapshot {
            name: name.to_string(),
            repositories: vec![],
        });
        self
    }

    /// Start a new repository in the current location.
    pub fn repository(mut self, name: &str) -> Self {
        self.locations
            .last_mut()
            .expect("add a location before a repository")
            .repositories
            .push(RepositorySnapshot {
                name: name.to_string(),
                partition_sets: vec![],
            });
        self
    }

    /// Add a partition set to the current repository.
    pub fn partition_set(mut self, record: PartitionSetRecord) -> Self {
        self.locations
            .last_mut()
            .expect("add a location before a partition set")
            .repositories
            .last_mut()
            .expect("add a repository before a partition set")
            .partition_sets
            .push(record);
        self
    }

    pub fn build(self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            locations: self.locations,
        }
    }

    pub fn build_host(self) -> SnapshotHost {
        SnapshotHost::new(self.build())
    }
}

/// Builder for a [`PartitionSetRecord`].
pub struct PartitionSetRecordBuilder {
    name: String,
    pipeline_name: String,
    mode: String,
    partitions: Vec<PartitionRecord>,
    error: Option<String>,
}

impl PartitionSetRecordBuilder {
    pub fn new(name: &str, pipeline_name: &str) -> Self {
        Self {
            name: name.to_string(),
            pipeline_name: pipeline_name.to_string(),
            mode: "default".to_string(),
            partitions: vec![],
            error: None,
        }
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = mode.to_string();
        self
    }

    /// Add a partition with empty config and no tags.
    pub fn partition(mut self, name: &str) -> Self {
        self.partitions.push(PartitionRecord {
            name: name.to_string(),
            run_config: RunConfig::Object(serde_json::Map::new()),
            tags: vec![],
        });
        self
    }

    /// Add a fully specified partition.
    pub fn partition_with(mut self, name: &str, run_config: RunConfig, tags: Vec<Tag>) -> Self {
        self.partitions.push(PartitionRecord {
            name: name.to_string(),
            run_config,
            tags,
        });
        self
    }

    /// Mark the set's partition function as having failed at capture.
    pub fn failing(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    pub fn build(self) -> PartitionSetRecord {
        PartitionSetRecord {
            name: self.name,
            pipeline_name: self.pipeline_name,
            mode: self.mode,
            partitions: self.partitions,
            error: self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_nesting() {
        let snapshot = SnapshotBuilder::new()
            .location("local")
            .repository("analytics")
            .partition_set(
                PartitionSetRecordBuilder::new("daily", "ingest")
                    .partition("2024-01-01")
                    .build(),
            )
            .repository("marketing")
            .build();

        let location = snapshot.location("local").unwrap();
        assert_eq!(location.repositories.len(), 2);
        assert_eq!(
            location.repository("analytics").unwrap().partition_sets[0].name,
            "daily"
        );
        assert!(location
            .repository("marketing")
            .unwrap()
            .partition_sets
            .is_empty());
    }

    #[test]
    fn test_failing_set_carries_message() {
        let record = PartitionSetRecordBuilder::new("broken", "ingest")
            .failing("boom")
            .build();
        assert_eq!(record.error.as_deref(), Some("boom"));
    }
}
