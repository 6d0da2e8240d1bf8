//! Partition detail commands: run config and tags

use anyhow::Result;
use gantry_core::RepositorySelector;
use gantry_query::{PartitionDetails, WorkspaceHost};

/// Print one partition's run configuration as YAML.
pub async fn config(
    host: &dyn WorkspaceHost,
    selector: &RepositorySelector,
    set_name: &str,
    partition_name: &str,
) -> Result<()> {
    let handle = host.resolve_repository(selector).await?;
    let details = PartitionDetails::new(host);
    let config = details.run_config(&handle, set_name, partition_name).await?;

    print!("{}", config.yaml);
    Ok(())
}

/// Print one partition's visible tags.
pub async fn tags(
    host: &dyn WorkspaceHost,
    selector: &RepositorySelector,
    set_name: &str,
    partition_name: &str,
) -> Result<()> {
    let handle = host.resolve_repository(selector).await?;
    let details = PartitionDetails::new(host);
    let tags = details.tags(&handle, set_name, partition_name).await?;

    if tags.is_empty() {
        println!("No visible tags.");
        return Ok(());
    }

    println!("{:<32} {:<32}", "KEY", "VALUE");
    println!("{}", "-".repeat(64));
    for tag in &tags {
        println!("{:<32} {:<32}", tag.key, tag.value);
    }

    Ok(())
}
