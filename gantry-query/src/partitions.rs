//! Partition views and windowed name listings

use gantry_core::{PartitionSetSnapshot, RepositoryHandle};
use tracing::{debug, warn};

use crate::catalog::PartitionSet;
use crate::host::WorkspaceHost;
use crate::pagination::{apply_page_window, PageWindow};
use crate::{QueryError, Result};

/// A view of one named member of a partition set.
///
/// Lightweight and never persisted; reading back the name, set, and
/// handle returns the construction inputs unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    handle: RepositoryHandle,
    partition_set: PartitionSetSnapshot,
    name: String,
}

impl Partition {
    /// Pure construction, no fetch.
    ///
    /// # Panics
    ///
    /// Panics if `partition_name` is empty; an empty name is a
    /// programming-contract violation, not a resolvable query.
    pub fn new(
        handle: RepositoryHandle,
        partition_set: PartitionSetSnapshot,
        partition_name: &str,
    ) -> Self {
        assert!(
            !partition_name.is_empty(),
            "partition name must be a non-empty identifier"
        );
        Self {
            handle,
            partition_set,
            name: partition_name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn partition_set(&self) -> &PartitionSetSnapshot {
        &self.partition_set
    }

    pub fn repository(&self) -> &RepositoryHandle {
        &self.handle
    }
}

/// Resolves windowed partition-name listings for a partition set.
pub struct PartitionLister<'a> {
    host: &'a dyn WorkspaceHost,
}

impl<'a> PartitionLister<'a> {
    pub fn new(host: &'a dyn WorkspaceHost) -> Self {
        Self { host }
    }

    /// Fetch the full ordered name list for `partition_set`, window it,
    /// and wrap each surviving name into a [`Partition`] view.
    ///
    /// A user-code failure captured by the host surfaces as
    /// [`QueryError::Execution`], message unchanged.
    pub async fn list(
        &self,
        partition_set: &PartitionSet,
        window: &PageWindow,
    ) -> Result<Vec<Partition>> {
        let outcome = self
            .host
            .fetch_partition_names(partition_set.repository(), partition_set.name())
            .await?;

        let names = outcome.into_result().map_err(|failure| {
            warn!(
                partition_set = %partition_set.name(),
                error = %failure,
                "Partition name listing failed in user code"
            );
            QueryError::Execution(failure)
        })?;

        let page = apply_page_window(&names, window);
        debug!(
            partition_set = %partition_set.name(),
            total = names.len(),
            page = page.len(),
            "Windowed partition names"
        );

        Ok(page
            .iter()
            .map(|name| partition_set.partition(name))
            .collect())
    }
}
