//! Partition listing command

use anyhow::Result;
use gantry_core::RepositorySelector;
use gantry_query::{PageWindow, PartitionLister, PartitionSetCatalog, WorkspaceHost};

/// List partition names in a partition set, windowed by the caller's
/// cursor/limit/reverse request.
pub async fn list(
    host: &dyn WorkspaceHost,
    selector: &RepositorySelector,
    set_name: &str,
    window: &PageWindow,
) -> Result<()> {
    let catalog = PartitionSetCatalog::new(host);
    let set = catalog.find(selector, set_name).await?;

    let lister = PartitionLister::new(host);
    let partitions = lister.list(&set, window).await?;

    if partitions.is_empty() {
        println!("No partitions in window.");
        return Ok(());
    }

    for partition in &partitions {
        println!("{}", partition.name());
    }
    println!("\n{} partition(s)", partitions.len());
    if let Some(last) = partitions.last() {
        if !window.reverse {
            println!("Next cursor: {}", last.name());
        }
    }

    Ok(())
}
