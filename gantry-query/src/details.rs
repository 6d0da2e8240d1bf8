//! Partition detail resolution: run configuration and tags

use gantry_core::{get_tag_type, RepositoryHandle, Tag, TagType};
use tracing::{debug, warn};

use crate::host::WorkspaceHost;
use crate::{QueryError, Result};

/// A partition's run configuration rendered as YAML text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRunConfig {
    pub yaml: String,
}

/// Resolves run configuration and tags for individual partitions.
pub struct PartitionDetails<'a> {
    host: &'a dyn WorkspaceHost,
}

impl<'a> PartitionDetails<'a> {
    pub fn new(host: &'a dyn WorkspaceHost) -> Self {
        Self { host }
    }

    /// The materialized run configuration for one partition, rendered
    /// to YAML in block style with stable key order.
    pub async fn run_config(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> Result<PartitionRunConfig> {
        let outcome = self
            .host
            .fetch_partition_config(handle, partition_set_name, partition_name)
            .await?;

        let config = outcome.into_result().map_err(|failure| {
            warn!(
                partition_set = %partition_set_name,
                partition = %partition_name,
                error = %failure,
                "Run config fetch failed in user code"
            );
            QueryError::Execution(failure)
        })?;

        let yaml = serde_yaml::to_string(&config)?;
        debug!(
            partition_set = %partition_set_name,
            partition = %partition_name,
            "Rendered partition run config"
        );
        Ok(PartitionRunConfig { yaml })
    }

    /// The visible tags for one partition, in host order, with hidden
    /// tags filtered out.
    pub async fn tags(
        &self,
        handle: &RepositoryHandle,
        partition_set_name: &str,
        partition_name: &str,
    ) -> Result<Vec<Tag>> {
        let outcome = self
            .host
            .fetch_partition_tags(handle, partition_set_name, partition_name)
            .await?;

        let tags = outcome.into_result().map_err(|failure| {
            warn!(
                partition_set = %partition_set_name,
                partition = %partition_name,
                error = %failure,
                "Tag fetch failed in user code"
            );
            QueryError::Execution(failure)
        })?;

        Ok(tags
            .into_iter()
            .filter(|tag| get_tag_type(&tag.key) != TagType::Hidden)
            .collect())
    }
}
