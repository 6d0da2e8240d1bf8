//! Workspace snapshot model and YAML loading
//!
//! A snapshot is the captured state of a workspace at load time:
//! locations, each holding repositories, each holding partition sets.
//! A partition set either carries its materialized partitions or the
//! error its partition function raised when the snapshot was taken.

use std::collections::HashSet;
use std::path::Path;

use gantry_core::{PartitionSetSnapshot, RunConfig, Tag};
use serde::{Deserialize, Serialize};

use crate::{Result, SnapshotError};

/// A captured workspace: the root of the snapshot document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    pub locations: Vec<LocationSnapshot>,
}

/// One repository location (a loaded user-code environment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSnapshot {
    pub name: String,
    #[serde(default)]
    pub repositories: Vec<RepositorySnapshot>,
}

/// One repository of pipeline definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    pub name: String,
    #[serde(default)]
    pub partition_sets: Vec<PartitionSetRecord>,
}

/// One partition set as captured, with either its partitions or the
/// error raised while computing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionSetRecord {
    pub name: String,
    pub pipeline_name: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub partitions: Vec<PartitionRecord>,
    /// Set when the partition function failed during capture; fetches
    /// against this set answer with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn default_mode() -> String {
    "default".to_string()
}

/// One materialized partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionRecord {
    pub name: String,
    #[serde(default = "empty_config")]
    pub run_config: RunConfig,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

fn empty_config() -> RunConfig {
    RunConfig::Object(serde_json::Map::new())
}

impl PartitionSetRecord {
    /// The host-facing description of this set.
    pub fn as_snapshot(&self) -> PartitionSetSnapshot {
        PartitionSetSnapshot::new(&self.name, &self.pipeline_name, &self.mode)
    }

    pub fn partition(&self, name: &str) -> Option<&PartitionRecord> {
        self.partitions.iter().find(|p| p.name == name)
    }
}

impl RepositorySnapshot {
    pub fn partition_set(&self, name: &str) -> Option<&PartitionSetRecord> {
        self.partition_sets.iter().find(|s| s.name == name)
    }
}

impl WorkspaceSnapshot {
    /// Parse a snapshot from a YAML string and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let snapshot: WorkspaceSnapshot = serde_yaml::from_str(yaml)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load a snapshot from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn location(&self, name: &str) -> Option<&LocationSnapshot> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Reject empty and duplicate names at every nesting level.
    /// Lookups are name-based, so duplicates would shadow silently,
    /// and an empty name could never be addressed by a query.
    fn validate(&self) -> Result<()> {
        let mut locations = HashSet::new();
        for location in &self.locations {
            require_named(&location.name, || "location".to_string())?;
            if !locations.insert(&location.name) {
                return Err(SnapshotError::DuplicateLocation(location.name.clone()));
            }
            let mut repositories = HashSet::new();
            for repository in &location.repositories {
                require_named(&repository.name, || {
                    format!("repository in location {}", location.name)
                })?;
                if !repositories.insert(&repository.name) {
                    return Err(SnapshotError::DuplicateRepository {
                        location: location.name.clone(),
                        repository: repository.name.clone(),
                    });
                }
                let mut sets = HashSet::new();
                for set in &repository.partition_sets {
                    require_named(&set.name, || {
                        format!("partition set in repository {}", repository.name)
                    })?;
                    if !sets.insert(&set.name) {
                        return Err(SnapshotError::DuplicatePartitionSet {
                            repository: repository.name.clone(),
                            name: set.name.clone(),
                        });
                    }
                    let mut partitions = HashSet::new();
                    for partition in &set.partitions {
                        require_named(&partition.name, || {
                            format!("partition in partition set {}", set.name)
                        })?;
                        if !partitions.insert(&partition.name) {
                            return Err(SnapshotError::DuplicatePartition {
                                partition_set: set.name.clone(),
                                name: partition.name.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl LocationSnapshot {
    pub fn repository(&self, name: &str) -> Option<&RepositorySnapshot> {
        self.repositories.iter().find(|r| r.name == name)
    }
}

fn require_named(name: &str, scope: impl FnOnce() -> String) -> Result<()> {
    if name.is_empty() {
        return Err(SnapshotError::EmptyName { scope: scope() });
    }
    Ok(())
}
